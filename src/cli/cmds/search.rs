use crate::base;
use crate::cli;

/// List transactions matching every given criterion
///
/// Text criteria match whole fields, ignoring case. Omitted criteria match
/// everything.
#[derive(clap::Parser)]
pub struct Search {
    /// Earliest date (yyyy-mm-dd), inclusive
    #[arg(long)]
    start: Option<base::Date>,

    /// Latest date (yyyy-mm-dd), inclusive
    #[arg(long)]
    end: Option<base::Date>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    vendor: Option<String>,

    /// Exact signed amount, negative for payments
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<base::Cents>,
}

impl Search {
    pub fn run(self, store: &base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let query = base::Query {
            start: self.start,
            end: self.end,
            description: self.description,
            vendor: self.vendor,
            amount: self.amount,
        };
        if query.is_empty() {
            tracing::info!("no search criteria given, listing all transactions");
        }
        let ledger = store.ledger().search(&query);
        Ok(cli::Output::Table(cli::util::table(
            config,
            "Custom Search",
            ledger,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = "
        2015-02-10|08:00:00|Paycheck|ACME|1500.00
        2015-03-02|09:30:00|Coffee|Cafe Luna|-4.50
        2015-03-15|12:00:00|coffee|Corner Shop|-4.50
        2015-03-20|18:15:00|Groceries|Fresh Mart|-62.10
    ";

    cli::testing::generate_testcases![
        (
            no_criteria,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "search"],
                    res: cli::testing::ResultMatcher::OkTable("Custom Search", LEDGER),
                }],
                initial_state: cli::testing::StrState::new().with_ledger(LEDGER),
            }
        ),
        (
            by_amount,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "search", "--amount", "-4.50"],
                    res: cli::testing::ResultMatcher::OkTable(
                        "Custom Search",
                        "
                        2015-03-02|09:30:00|Coffee|Cafe Luna|-4.50
                        2015-03-15|12:00:00|coffee|Corner Shop|-4.50
                        "
                    ),
                }],
                initial_state: cli::testing::StrState::new().with_ledger(LEDGER),
            }
        ),
        (
            combined,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &[
                        "",
                        "search",
                        "--start",
                        "2015-03-10",
                        "--end",
                        "2015-03-31",
                        "--description",
                        "COFFEE",
                        "--vendor",
                        "",
                    ],
                    res: cli::testing::ResultMatcher::OkTable(
                        "Custom Search",
                        "2015-03-15|12:00:00|coffee|Corner Shop|-4.50"
                    ),
                }],
                initial_state: cli::testing::StrState::new().with_ledger(LEDGER),
            }
        ),
    ];
}
