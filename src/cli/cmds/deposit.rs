use anyhow::Context;

use crate::base;
use crate::cli;

/// Record money received
#[derive(clap::Parser)]
pub struct Deposit {
    #[command(flatten)]
    entry: cli::sharedopts::EntryOpts,
}

impl Deposit {
    pub fn run(
        self,
        store: &mut base::Store,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let date = self.entry.date();
        store
            .add_deposit(
                date,
                self.entry.time(),
                self.entry.description,
                self.entry.vendor,
                self.entry.amount,
            )
            .context("failed to record deposit")?;
        Ok(cli::Output::Table(cli::util::day_table(config, store, date)))
    }
}
