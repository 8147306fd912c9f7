use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl std::hash::Hash for Interval {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let interval = if self.is_empty() { Self::EMPTY } else { *self };
        interval.start.hash(state);
        interval.end.hash(state);
    }
}

impl Interval {
    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    /// Builds an interval from optional bounds. A missing bound is unbounded
    /// on that side.
    pub fn new(start: Option<base::Date>, end: Option<base::Date>) -> Self {
        Self {
            start: start.unwrap_or(base::Date::MIN),
            end: end.unwrap_or(base::Date::MAX),
        }
    }

    /// The single-day interval `[dt, dt]`.
    pub fn day(dt: base::Date) -> Self {
        Self { start: dt, end: dt }
    }

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
