use crate::base;

/// Fields of a transaction to be recorded.
#[derive(clap::Args)]
pub struct EntryOpts {
    /// Amount of money, greater than zero
    #[arg(allow_negative_numbers = true)]
    pub amount: base::Cents,

    /// Transaction date (yyyy-mm-dd), defaults to today
    #[arg(short, long)]
    pub date: Option<base::Date>,

    /// Transaction time (HH:mm:ss), defaults to now
    #[arg(short, long)]
    pub time: Option<base::Time>,

    /// What the money was for
    #[arg(long, default_value_t, hide_default_value = true)]
    pub description: String,

    /// Who the money came from or went to
    #[arg(long, default_value_t, hide_default_value = true)]
    pub vendor: String,
}

impl EntryOpts {
    pub fn date(&self) -> base::Date {
        self.date.unwrap_or_else(base::Date::today)
    }

    pub fn time(&self) -> base::Time {
        self.time.unwrap_or_else(base::Time::now)
    }
}
