use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// Parses ledger file contents written inline in a test, ignoring each
/// line's surrounding whitespace.
pub fn ledger(s: &str) -> base::Ledger {
    s.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .parse()
        .unwrap()
}

/// The expected or actual objects deserialized from a working directory.
/// Unset fields correspond to nonexistent files. The ledger lives wherever the
/// config says it does.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    ledger: Option<base::Ledger>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the directory's [`base::Ledger`] from indented file contents.
    pub fn with_ledger(mut self, s: &str) -> Self {
        self.ledger = Some(ledger(s));
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = fs
            .path::<base::Config>()
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let ledger_path = fs.ledger_path(config.as_ref().unwrap_or(&base::Config::default()));
        let ledger = ledger_path
            .exists()
            .then(|| base::fs::read_or_default::<base::Ledger>(&ledger_path).unwrap());
        Self { config, ledger }
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    ledger: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the directory's [`base::Ledger`] file contents. Indentation is
    /// stripped from each line and the contents are normalized before being
    /// written.
    pub fn with_ledger(mut self, s: &'a str) -> Self {
        self.ledger = Some(s);
        self
    }

    /// Writes string contents to `fs`. Panics if any field is not a valid
    /// serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        let state = self.to_state();
        if let Some(s) = self.config {
            std::fs::write(fs.path::<base::Config>(), s).unwrap();
        }
        if let Some(ledger) = &state.ledger {
            let config = state.config.unwrap_or_default();
            std::fs::write(fs.ledger_path(&config), ledger.to_string()).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.ledger {
            os = os.with_ledger(s);
        }
        os
    }
}
