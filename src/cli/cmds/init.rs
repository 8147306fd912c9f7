use anyhow::Context;

use crate::base;
use crate::cli;

/// Write a config file in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let existed = path.exists();
        let config = if !existed {
            initial_config()
        } else if self.reset_config {
            base::Config::default()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), reset = self.reset_config, "wrote config");

        Ok(cli::Output::Str(if !existed {
            format!("Config initialized in '{}'", fs.dir().display())
        } else if self.reset_config {
            "Config reset to defaults.".to_string()
        } else {
            format!("Config rewritten in '{}'", fs.dir().display())
        }))
    }
}
