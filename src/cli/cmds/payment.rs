use anyhow::Context;

use crate::base;
use crate::cli;

/// Record money spent
///
/// The amount is entered as a positive number and stored as negative.
#[derive(clap::Parser)]
pub struct Payment {
    #[command(flatten)]
    entry: cli::sharedopts::EntryOpts,
}

impl Payment {
    pub fn run(
        self,
        store: &mut base::Store,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let date = self.entry.date();
        store
            .add_payment(
                date,
                self.entry.time(),
                self.entry.description,
                self.entry.vendor,
                self.entry.amount,
            )
            .context("failed to record payment")?;
        Ok(cli::Output::Table(cli::util::day_table(config, store, date)))
    }
}
