use crate::base;

/// Field separator of the ledger file format.
pub const SEPARATOR: char = '|';

/// A single deposit or payment. Positive amounts are deposits, negative
/// amounts are payments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: base::Date,
    time: base::Time,
    description: String,
    vendor: String,
    amount: base::Cents,
}

impl Transaction {
    pub fn new(
        date: base::Date,
        time: base::Time,
        description: String,
        vendor: String,
        amount: base::Cents,
    ) -> Self {
        Self {
            date,
            time,
            description,
            vendor,
            amount,
        }
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn time(&self) -> base::Time {
        self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    pub fn is_deposit(&self) -> bool {
        !self.amount.is_negative()
    }

    pub fn is_payment(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Returns true if `s` can be written as a field without corrupting the line
/// structure of the ledger file.
pub fn is_storable_text(s: &str) -> bool {
    !s.contains([SEPARATOR, '\n', '\r'])
}

impl std::fmt::Display for Transaction {
    /// Writes `date|time|description|vendor|amount` with no line terminator.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.date,
            self.time,
            self.description,
            self.vendor,
            self.amount,
            sep = SEPARATOR,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 5 fields separated by '|', found {0}")]
    FieldCount(usize),
    #[error("invalid date")]
    Date(#[source] base::date::ParseError),
    #[error("invalid time")]
    Time(#[source] base::walltime::ParseError),
    #[error("invalid amount")]
    Amount(#[source] base::cents::ParseError),
}

impl std::str::FromStr for Transaction {
    type Err = ParseError;

    /// Parses a single ledger line. A trailing carriage return is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('\r').unwrap_or(s);
        let fields = s.split(SEPARATOR).collect::<Vec<_>>();
        let [date, time, description, vendor, amount] = fields.as_slice() else {
            return Err(ParseError::FieldCount(fields.len()));
        };
        Ok(Self {
            date: date.parse().map_err(ParseError::Date)?,
            time: time.parse().map_err(ParseError::Time)?,
            description: description.to_string(),
            vendor: vendor.to_string(),
            amount: amount.parse().map_err(ParseError::Amount)?,
        })
    }
}

impl TryFrom<&str> for Transaction {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
