/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Cents {
    /// Formats with exactly two decimal places and a leading `-` for negative
    /// quantities. Honors width and alignment flags.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let s = format!("{}{}.{:02}", sign, abs / 100, abs % 100);
        f.pad(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("no digits")]
    NoDigits,
    #[error("not a decimal number")]
    InvalidDigit,
    #[error("commas must separate groups of three digits")]
    Grouping,
    #[error("amount is too large")]
    Overflow,
}

/// Strips thousands separators from the whole part of a decimal string.
fn ungroup(whole: &str) -> Result<String, ParseError> {
    let mut groups = whole.split(',');
    let first = groups.next().unwrap_or_default();
    if first.is_empty() || first.len() > 3 || groups.any(|g| g.len() != 3) {
        return Err(ParseError::Grouping);
    }
    Ok(whole.replace(',', ""))
}

impl std::str::FromStr for Cents {
    type Err = ParseError;

    /// Parses a cents quantity from a human-readable decimal string, which may
    /// have a leading sign and comma thousands separators. Decimal places
    /// beyond the second are rounded half-up. Surrounding whitespace is not
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match s.as_bytes().first() {
            None => return Err(ParseError::Empty),
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let whole = if whole.contains(',') {
            ungroup(whole)?
        } else {
            whole.to_string()
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseError::NoDigits);
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit);
        }

        let push_digit = |acc: i64, digit: i64| {
            acc.checked_mul(10)
                .and_then(|x| x.checked_add(digit))
                .ok_or(ParseError::Overflow)
        };
        let mut cents = 0i64;
        for b in whole.bytes() {
            cents = push_digit(cents, (b - b'0') as i64)?;
        }
        let mut frac_digits = frac
            .bytes()
            .map(|b| (b - b'0') as i64)
            .chain(std::iter::repeat(0));
        for _ in 0..2 {
            cents = push_digit(cents, frac_digits.next().unwrap_or_default())?;
        }
        if frac_digits.next().unwrap_or_default() >= 5 {
            cents = cents.checked_add(1).ok_or(ParseError::Overflow)?;
        }
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cents(0), "0.00")]
    #[case(Cents(10), "0.10")]
    #[case(Cents(-123), "-1.23")]
    #[case(Cents(-450), "-4.50")]
    #[case(Cents(1200), "12.00")]
    #[case(Cents(123456789), "1234567.89")]
    #[case(Cents(-5), "-0.05")]
    #[case(Cents(i64::MIN), "-92233720368547758.08")]
    fn test_to_string(#[case] cents: Cents, #[case] want: &str) {
        assert_eq!(cents.to_string(), want);
    }

    #[test]
    fn test_to_string_padding() {
        assert_eq!(format!("{:>8}", Cents(-450)), "   -4.50");
        assert_eq!(format!("{:<8}|", Cents(450)), "4.50    |");
    }

    #[rstest]
    #[case("0", Cents(0))]
    #[case("0.", Cents(0))]
    #[case(".0", Cents(0))]
    #[case("-0", Cents(0))]
    #[case("1", Cents(100))]
    #[case("+1.", Cents(100))]
    #[case("-.1", Cents(-10))]
    #[case("-4.50", Cents(-450))]
    #[case("12.00", Cents(1200))]
    #[case("1,234.56", Cents(123456))]
    #[case("-1,234,567", Cents(-123456700))]
    #[case("12,345.6", Cents(1234560))]
    #[case("999,999", Cents(99999900))]
    #[case("0001234.56", Cents(123456))]
    #[case("1.234", Cents(123))]
    #[case("1.235", Cents(124))]
    #[case("1.2349999", Cents(123))]
    #[case("-1.235", Cents(-124))]
    #[case("-1.234", Cents(-123))]
    #[case("0.995", Cents(100))]
    fn test_from_str(#[case] s: &str, #[case] want: Cents) {
        assert_eq!(s.parse::<Cents>().unwrap(), want)
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("  ", ParseError::InvalidDigit)]
    #[case(" 12.5 ", ParseError::InvalidDigit)]
    #[case("+", ParseError::NoDigits)]
    #[case("-.", ParseError::NoDigits)]
    #[case(".", ParseError::NoDigits)]
    #[case("+a.", ParseError::InvalidDigit)]
    #[case("+-0.", ParseError::InvalidDigit)]
    #[case("1.2.3", ParseError::InvalidDigit)]
    #[case("1e5", ParseError::InvalidDigit)]
    #[case("abc", ParseError::InvalidDigit)]
    #[case("1,2,3", ParseError::Grouping)]
    #[case("12,34", ParseError::Grouping)]
    #[case("1234,567", ParseError::Grouping)]
    #[case(",123", ParseError::Grouping)]
    #[case("123,", ParseError::Grouping)]
    #[case("1,,234", ParseError::Grouping)]
    #[case("1.234,5", ParseError::InvalidDigit)]
    #[case("99999999999999999999", ParseError::Overflow)]
    fn test_from_str_failing(#[case] s: &str, #[case] want: ParseError) {
        assert_eq!(s.parse::<Cents>().unwrap_err(), want)
    }

    #[test]
    fn test_sum() {
        let total: Cents = [Cents(100), Cents(-450), Cents(25)].into_iter().sum();
        assert_eq!(total, Cents(-325));
    }
}
