use crate::base;

/// Ordered transactions. Order is insertion order, which for a loaded ledger is
/// file line order. Filters return new ledgers and preserve that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger(Vec<base::Transaction>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&base::Transaction> {
        self.0.last()
    }

    pub fn push(&mut self, t: base::Transaction) {
        self.0.push(t);
    }

    fn filter<F>(&self, pred: F) -> Self
    where
        F: Fn(&base::Transaction) -> bool,
    {
        self.iter().filter(|&t| pred(t)).collect()
    }

    pub fn all(&self) -> Self {
        self.clone()
    }

    /// Transactions with a non-negative amount.
    pub fn deposits(&self) -> Self {
        self.filter(base::Transaction::is_deposit)
    }

    /// Transactions with a negative amount.
    pub fn payments(&self) -> Self {
        self.filter(base::Transaction::is_payment)
    }

    pub fn in_interval(&self, interval: base::Interval) -> Self {
        self.filter(|t| interval.contains(t.date()))
    }

    /// Transactions whose vendor equals `name`, ignoring case.
    pub fn by_vendor(&self, name: &str) -> Self {
        self.filter(|t| base::util::eq_ignore_case(t.vendor(), name))
    }

    pub fn search(&self, query: &base::Query) -> Self {
        self.filter(|t| query.matches(t))
    }

    pub fn total(&self) -> base::Cents {
        self.iter().map(base::Transaction::amount).sum()
    }
}

impl FromIterator<base::Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = &'a base::Transaction>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Ledger {
    /// Writes one line per transaction, each with a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in self.iter() {
            writeln!(f, "{}", t)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    pub line: usize,
    pub source: base::transaction::ParseError,
}

impl std::str::FromStr for Ledger {
    type Err = ParseError;

    /// Parses ledger file contents. Blank lines are skipped. Other lines are
    /// parsed as-is, and parsing stops at the first malformed one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .enumerate()
            .filter(|(_, x)| !x.trim().is_empty())
            .map(|(i, x)| {
                x.parse::<base::Transaction>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Ledger {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
