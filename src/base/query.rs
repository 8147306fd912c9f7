use crate::base;

/// Custom search criteria. Every criterion is optional and a transaction
/// matches when it satisfies all criteria that are set. Empty strings count as
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub start: Option<base::Date>,
    pub end: Option<base::Date>,
    /// Matched exactly, ignoring case.
    pub description: Option<String>,
    /// Matched exactly, ignoring case.
    pub vendor: Option<String>,
    pub amount: Option<base::Cents>,
}

impl Query {
    pub fn interval(&self) -> base::Interval {
        base::Interval::new(self.start, self.end)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }

    fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns true if no criterion is set, in which case every transaction
    /// matches.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.description().is_none()
            && self.vendor().is_none()
            && self.amount.is_none()
    }

    pub fn matches(&self, t: &base::Transaction) -> bool {
        self.interval().contains(t.date())
            && self
                .description()
                .is_none_or(|s| base::util::eq_ignore_case(s, t.description()))
            && self
                .vendor()
                .is_none_or(|s| base::util::eq_ignore_case(s, t.vendor()))
            && self.amount.is_none_or(|a| a == t.amount())
    }
}
