use crate::base;
use crate::cli;

/// List recorded transactions
#[derive(clap::Parser)]
pub struct Ledger {
    /// Which transactions to list
    #[arg(default_value_t = View::All)]
    view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
enum View {
    All,
    Deposits,
    Payments,
}

impl Ledger {
    pub fn run(self, store: &base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let ledger = store.ledger();
        let (title, ledger) = match self.view {
            View::All => ("All Transactions", ledger.all()),
            View::Deposits => ("Deposits", ledger.deposits()),
            View::Payments => ("Payments", ledger.payments()),
        };
        Ok(cli::Output::Table(cli::util::table(config, title, ledger)))
    }
}
