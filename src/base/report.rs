use crate::base;

/// Named date-range presets, computed relative to a given day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Report {
    MonthToDate,
    PreviousMonth,
    YearToDate,
    PreviousYear,
}

impl Report {
    /// Returns the inclusive range of dates the report covers when run on
    /// `today`. Returns an empty interval if the range falls before
    /// `0000-01-01`.
    pub fn interval(self, today: base::Date) -> base::Interval {
        use base::Datepart::{Month, Year};

        let whole = |part, offset| {
            today
                .first_of(part)
                .shift(part, offset)
                .map_or(base::Interval::EMPTY, |start| base::Interval {
                    start,
                    end: start.last_of(part),
                })
        };
        match self {
            Report::MonthToDate => base::Interval {
                start: today.first_of(Month),
                end: today,
            },
            Report::PreviousMonth => whole(Month, -1),
            Report::YearToDate => base::Interval {
                start: today.first_of(Year),
                end: today,
            },
            Report::PreviousYear => whole(Year, -1),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Report::MonthToDate => "Month To Date",
            Report::PreviousMonth => "Previous Month",
            Report::YearToDate => "Year To Date",
            Report::PreviousYear => "Previous Year",
        }
    }
}
