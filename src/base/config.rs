/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Ledger file path, relative to the working directory.
    pub ledger_file: String,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: "transactions.csv".to_string(),
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    /// Parses a JSON object. Any other JSON value is rejected, including
    /// arrays that serde would otherwise map onto the fields in order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str::<serde_json::Value>(s)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
