use clap::builder::TypedValueParser;

use crate::base;
use crate::cli;

/// List transactions in a preset date range ending today
#[derive(clap::Parser)]
pub struct Report {
    #[arg(
        ignore_case = true,
        value_parser = clap::builder::PossibleValuesParser::new(
            <base::Report as strum::VariantNames>::VARIANTS.iter().copied()
        )
        .map(|s| s.parse::<base::Report>().expect("possible value should parse as a report")),
    )]
    report: base::Report,
}

impl Report {
    pub fn run(self, store: &base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let interval = self.report.interval(base::Date::today());
        tracing::debug!(report = %self.report, %interval, "running report");
        let ledger = store.ledger().in_interval(interval);
        Ok(cli::Output::Table(cli::util::table(
            config,
            self.report.title(),
            ledger,
        )))
    }
}
