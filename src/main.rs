mod base;
mod cli;

use anyhow::Context;

/// Environment variable holding the log filter, e.g. `finledger=debug`.
const LOG_ENV: &str = "FINLEDGER_LOG";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    fn try_main() -> anyhow::Result<()> {
        init_tracing();
        let root = <cli::Root as clap::Parser>::parse();
        let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
        let fs = base::Fs::new(cwd);
        let output = root.run(&fs, std::io::stdin().lock(), std::io::stdout())?;
        print!("{}", output);
        Ok(())
    }

    if let Err(e) = try_main() {
        eprint!("error");
        e.chain().for_each(|cause| eprint!(": {}", cause));
        eprintln!();
        std::process::exit(1);
    }
}
