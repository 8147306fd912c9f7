use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Returns the terminal's width in columns, or 0 if it can't be determined.
#[cfg(not(test))]
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

#[cfg(test)]
pub fn term_width() -> usize {
    80
}

pub fn table(
    config: &base::Config,
    title: impl Into<String>,
    ledger: base::Ledger,
) -> base::table::Config {
    base::table::Config {
        charset: charset_from_config(config),
        title: title.into(),
        term_width: term_width(),
        ledger,
    }
}

/// Returns a table of the transactions in `store` dated `date`.
pub fn day_table(
    config: &base::Config,
    store: &base::Store,
    date: base::Date,
) -> base::table::Config {
    table(
        config,
        format!("Transactions On {}", date),
        store.ledger().in_interval(base::Interval::day(date)),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error(transparent)]
    Parse(#[from] base::cents::ParseError),
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Parses an amount entered by the user, which must be greater than zero.
pub fn parse_positive_amount(s: &str) -> Result<base::Cents, AmountError> {
    let amount = s.trim().parse::<base::Cents>()?;
    if !amount.is_positive() {
        return Err(AmountError::NotPositive);
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("must not contain '|'")]
pub struct TextError;

/// Parses free text to be stored in a transaction field.
pub fn parse_text(s: &str) -> Result<String, TextError> {
    let s = s.trim();
    if !base::transaction::is_storable_text(s) {
        return Err(TextError);
    }
    Ok(s.to_string())
}

/// Parses `s` with `parse`, treating blank input as absent.
pub fn parse_optional<T, E>(
    s: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<Option<T>, E> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    parse(s).map(Some)
}
