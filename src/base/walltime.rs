const FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[hour]:[minute]:[second]");

/// A wall-clock time of day with whole-second precision and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time(time::Time);

impl Time {
    pub const MIDNIGHT: Self = Time(time::Time::MIDNIGHT);

    pub fn hour(self) -> u8 {
        self.0.hour()
    }

    pub fn minute(self) -> u8 {
        self.0.minute()
    }

    pub fn second(self) -> u8 {
        self.0.second()
    }

    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        time::Time::from_hms(hour, minute, second).ok().map(Self)
    }

    /// Returns the local time truncated to the second, or the UTC time if the
    /// local offset cannot be determined.
    #[cfg(not(test))]
    pub fn now() -> Self {
        let (h, m, s) = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
            .to_hms();
        Self::from_hms(h, m, s).unwrap_or(Self::MIDNIGHT)
    }

    /// Returns the local time.
    #[cfg(test)]
    pub fn now() -> Self {
        Self::from_hms(12, 0, 0).expect("'now' for tests should be valid")
    }
}

impl std::fmt::Display for Time {
    /// Formats as `HH:mm:ss`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = format!("{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second());
        f.pad(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected format HH:mm:ss")]
    BadFormat(#[source] time::error::Parse),
}

impl std::str::FromStr for Time {
    type Err = ParseError;

    /// Parses a zero-padded 24-hour time with seconds, `HH:mm:ss`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        time::Time::parse(s, FORMAT)
            .map(Self)
            .map_err(Self::Err::BadFormat)
    }
}

impl TryFrom<&str> for Time {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
