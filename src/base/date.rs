use crate::base;

const FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Date(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Date(time::macros::date!(9999 - 12 - 31));

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date, or the UTC date if the local offset cannot be
    /// determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
            .date();
        Self::new(now).unwrap_or(Self::MAX)
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    pub fn first_of(self, part: base::Datepart) -> Self {
        match part {
            base::Datepart::Year => Self::from_ymd(self.year(), 1, 1)
                .expect("first day of a valid year should be a valid date"),
            base::Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
        }
    }

    pub fn last_of(self, part: base::Datepart) -> Self {
        match part {
            base::Datepart::Year => Self::from_ymd(self.year(), 12, 31)
                .expect("final day of a valid year should be a valid date"),
            base::Datepart::Month => Self::from_ymd(
                self.year(),
                self.month(),
                if (self.month() == 2)
                    && (self.year() % 4 == 0)
                    && ((self.year() % 100 != 0) || (self.year() % 400 == 0))
                {
                    29
                } else {
                    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31][self.month() as usize]
                },
            )
            .expect("final day of month should be computed correctly"),
        }
    }

    /// Offsets the given date by the given datepart, returning `None` if the
    /// resultant date is out of bounds.
    ///
    /// Clamps the resultant date's day to the resultant month's
    /// last-day-of-month. For example, if the original date is a Mar 31,
    /// shifting by -1 month will yield Feb 28 or Feb 29.
    pub fn shift(self, part: base::Datepart, offset: i32) -> Option<Self> {
        let (y, m) = match part {
            base::Datepart::Year => (self.year().checked_add(offset)?, self.month()),
            base::Datepart::Month => {
                let index = (self.year() as i64) * 12 + (self.month() as i64 - 1) + offset as i64;
                let y = i32::try_from(index.div_euclid(12)).ok()?;
                let m = (index.rem_euclid(12) + 1) as u8;
                (y, m)
            }
        };
        let last = Self::from_ymd(y, m, 1)?.last_of(base::Datepart::Month);
        Self::from_ymd(y, m, last.day().min(self.day()))
    }
}

impl std::fmt::Display for Date {
    /// Formats as `yyyy-MM-dd`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day());
        f.pad(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected format yyyy-MM-dd")]
    BadFormat(#[source] time::error::Parse),
    #[error("expected format yyyy-MM-dd, without a sign")]
    Signed,
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a zero-padded ISO 8601 date, `yyyy-MM-dd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        // `[year]` takes an optional sign.
        if s.starts_with(['+', '-']) {
            return Err(Self::Err::Signed);
        }
        time::Date::parse(s, FORMAT)
            .map_err(Self::Err::BadFormat)
            .and_then(|x| Self::new(x).ok_or(Self::Err::OutOfRange))
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
