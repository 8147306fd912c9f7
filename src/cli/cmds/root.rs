use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal finance ledger
///
/// Run without a command for an interactive session.
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Deposit(cli::cmds::deposit::Deposit),
    Payment(cli::cmds::payment::Payment),
    Ledger(cli::cmds::ledger::Ledger),
    Report(cli::cmds::report::Report),
    Vendor(cli::cmds::vendor::Vendor),
    Search(cli::cmds::search::Search),
}

impl Root {
    /// Runs the command. The interactive session reads answers from `input`
    /// and writes menus and tables to `output`.
    pub fn run<R, W>(self, fs: &base::Fs, input: R, output: W) -> anyhow::Result<cli::Output>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        if let Some(Commands::Init(cmd)) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let mut store = fs.open_store(&config).with_context(|| {
            format!("failed to read '{}'", fs.ledger_path(&config).display())
        })?;

        match self.command {
            Some(Commands::Init(_)) => unreachable!(),
            Some(Commands::Deposit(cmd)) => cmd.run(&mut store, &config),
            Some(Commands::Payment(cmd)) => cmd.run(&mut store, &config),
            Some(Commands::Ledger(cmd)) => cmd.run(&store, &config),
            Some(Commands::Report(cmd)) => cmd.run(&store, &config),
            Some(Commands::Vendor(cmd)) => cmd.run(&store, &config),
            Some(Commands::Search(cmd)) => cmd.run(&store, &config),
            None => {
                cli::menu::Menu::new(&mut store, &config, base::Date::today(), input, output)
                    .run()
                    .context("interactive session failed")?;
                Ok(cli::Output::Str("Goodbye!".to_string()))
            }
        }
    }
}
