use strum::IntoEnumIterator;

use crate::base;
use crate::cli;
use crate::cli::prompt::Interrupt;

const HOME: &str = "\
Choose an option:
D) Add deposit
P) Make payment
L) Ledger
X) Exit";

const LEDGER: &str = "\
Choose an option:
A) All
D) Deposits
P) Payments
R) Reports
H) Home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Deposit,
    Payment,
}

/// Interactive session over a store. Menu choices are case-insensitive.
pub struct Menu<'a, R, W> {
    store: &'a mut base::Store,
    config: &'a base::Config,
    today: base::Date,
    prompt: cli::prompt::Prompt<R, W>,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    pub fn new(
        store: &'a mut base::Store,
        config: &'a base::Config,
        today: base::Date,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            config,
            today,
            prompt: cli::prompt::Prompt::new(input, output),
        }
    }

    /// Runs the home menu until the user exits or input ends.
    pub fn run(mut self) -> std::io::Result<()> {
        tracing::debug!(path = %self.store.path().display(), "interactive session started");
        match self.home() {
            Ok(()) | Err(Interrupt::Eof) => Ok(()),
            Err(Interrupt::Io(e)) => Err(e),
        }
    }

    fn choose(&mut self, menu: &str) -> Result<String, Interrupt> {
        self.prompt.say(format_args!("{}", menu))?;
        Ok(self.prompt.line("> ")?.trim().to_lowercase())
    }

    fn invalid(&mut self) -> Result<(), Interrupt> {
        self.prompt.say(format_args!("Invalid option.\n"))
    }

    fn show(&mut self, title: &str, ledger: base::Ledger) -> Result<(), Interrupt> {
        let output = cli::Output::Table(cli::util::table(self.config, title, ledger));
        self.prompt.say(format_args!("\n{}", output))
    }

    fn home(&mut self) -> Result<(), Interrupt> {
        loop {
            match self.choose(HOME)?.as_str() {
                "d" => self.add(Entry::Deposit)?,
                "p" => self.add(Entry::Payment)?,
                "l" => self.ledger()?,
                "x" => return Ok(()),
                _ => self.invalid()?,
            }
        }
    }

    fn add(&mut self, entry: Entry) -> Result<(), Interrupt> {
        let today = self.today;
        let date = self
            .prompt
            .ask("Date (yyyy-mm-dd, blank for today): ", |s| {
                cli::util::parse_optional(s, str::parse::<base::Date>).map(|x| x.unwrap_or(today))
            })?;
        let time = self
            .prompt
            .ask("Time (HH:mm:ss, blank for now): ", |s| {
                cli::util::parse_optional(s, str::parse::<base::Time>)
                    .map(|x| x.unwrap_or_else(base::Time::now))
            })?;
        let description = self.prompt.ask("Description: ", cli::util::parse_text)?;
        let vendor = self.prompt.ask("Vendor: ", cli::util::parse_text)?;
        let amount = self
            .prompt
            .ask("Amount (greater than 0): ", cli::util::parse_positive_amount)?;

        let res = match entry {
            Entry::Deposit => self
                .store
                .add_deposit(date, time, description, vendor, amount),
            Entry::Payment => self
                .store
                .add_payment(date, time, description, vendor, amount),
        };
        match res {
            Ok(_) => match entry {
                Entry::Deposit => self.prompt.say(format_args!("Deposit saved.\n")),
                Entry::Payment => self.prompt.say(format_args!("Payment recorded.\n")),
            },
            Err(e) => {
                let e = anyhow::Error::new(e);
                self.prompt.say(format_args!("Error: {:#}\n", e))
            }
        }
    }

    fn ledger(&mut self) -> Result<(), Interrupt> {
        loop {
            let (title, ledger) = match self.choose(LEDGER)?.as_str() {
                "a" => ("All Transactions", self.store.ledger().all()),
                "d" => ("Deposits", self.store.ledger().deposits()),
                "p" => ("Payments", self.store.ledger().payments()),
                "r" => {
                    self.reports()?;
                    continue;
                }
                "h" => return Ok(()),
                _ => {
                    self.invalid()?;
                    continue;
                }
            };
            self.show(title, ledger)?;
        }
    }

    fn reports(&mut self) -> Result<(), Interrupt> {
        let mut menu = "Choose an option:\n".to_string();
        for (i, report) in base::Report::iter().enumerate() {
            menu.push_str(&format!("{}) {}\n", i + 1, report.title()));
        }
        menu.push_str("5) Search by vendor\n6) Custom search\n0) Back");

        loop {
            let choice = self.choose(&menu)?;
            let report = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| base::Report::iter().nth(n));
            match (choice.as_str(), report) {
                ("0", _) => return Ok(()),
                ("5", _) => self.vendor()?,
                ("6", _) => self.search()?,
                (_, Some(report)) => {
                    let ledger = self
                        .store
                        .ledger()
                        .in_interval(report.interval(self.today));
                    self.show(report.title(), ledger)?
                }
                (_, None) => self.invalid()?,
            }
        }
    }

    fn vendor(&mut self) -> Result<(), Interrupt> {
        let name = self.prompt.line("Vendor: ")?;
        let ledger = self.store.ledger().by_vendor(name.trim());
        self.show("Transactions By Vendor", ledger)
    }

    fn search(&mut self) -> Result<(), Interrupt> {
        let date = |s: &str| cli::util::parse_optional(s, str::parse::<base::Date>);
        let start = self
            .prompt
            .ask("Start date (yyyy-mm-dd, blank for none): ", date)?;
        let end = self
            .prompt
            .ask("End date (yyyy-mm-dd, blank for none): ", date)?;
        let description = self.prompt.line("Description (blank for none): ")?;
        let vendor = self.prompt.line("Vendor (blank for none): ")?;
        let amount = self.prompt.ask("Amount (blank for none): ", |s| {
            cli::util::parse_optional(s, str::parse::<base::Cents>)
        })?;

        let query = base::Query {
            start,
            end,
            description: Some(description.trim().to_string()),
            vendor: Some(vendor.trim().to_string()),
            amount,
        };
        tracing::debug!(?query, "custom search");
        let ledger = self.store.ledger().search(&query);
        self.show("Custom Search", ledger)
    }
}
