use crate::base;
use crate::cli;

/// List transactions with a vendor, ignoring case
#[derive(clap::Parser)]
pub struct Vendor {
    name: String,
}

impl Vendor {
    pub fn run(self, store: &base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let ledger = store.ledger().by_vendor(&self.name);
        Ok(cli::Output::Table(cli::util::table(
            config,
            "Transactions By Vendor",
            ledger,
        )))
    }
}
