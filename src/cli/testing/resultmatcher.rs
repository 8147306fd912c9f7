use crate::base;
use crate::cli;

/// Helps check if a command returns the expected [`anyhow::Result<cli::Output>`].
pub enum ResultMatcher<'a> {
    /// Asserts result is an `Ok(Output::Table(_))` with the given title,
    /// listing exactly the transactions in the given ledger file contents.
    /// The table is expected to use the default charset.
    OkTable(&'a str, &'a str),

    /// Asserts result is an `Ok(Output::Str(_))` matching the given glob
    /// pattern. Matching is case-insensitive.
    OkStrGlob(&'a str),

    /// Asserts result is `Err` and that the error's `to_string()` matches the
    /// give glob pattern. Matching is case-insensitive.
    ErrGlob(&'a str),
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<cli::Output>) {
        match self {
            ResultMatcher::OkTable(title, ledger) => {
                let want_output = cli::Output::Table(base::table::Config {
                    charset: base::Charset::default(),
                    title: title.to_string(),
                    term_width: cli::util::term_width(),
                    ledger: cli::testing::state::ledger(ledger),
                });
                if let Ok(got_output) = &result {
                    if got_output == &want_output {
                        return;
                    }
                    text_diff::print_diff(
                        want_output.to_string().as_str(),
                        got_output.to_string().as_str(),
                        "\n",
                    );
                    panic!("diff between want (red) and got (green), see above");
                }
                panic!("\n\twant: {:?}\n\tgot: {:?}\n", want_output, result);
            }
            ResultMatcher::OkStrGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Ok(cli::Output::Str(ref got_string)) if pattern_obj.matches(got_string.to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Err(ref got_err) if pattern_obj.matches(got_err.to_string().to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
