use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Table(base::table::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => write!(f, "{}", config.to_table()),
        }
    }
}
