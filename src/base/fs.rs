use crate::base;

/// Application filesystem.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files with a
/// fixed name.
pub trait Io: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Io for base::Config {
    const FILENAME: &'static str = ".finledger.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Io,
    {
        self.dir.join(T::FILENAME)
    }

    /// Returns the ledger file location named by `config`.
    pub fn ledger_path(&self, config: &base::Config) -> std::path::PathBuf {
        self.dir.join(&config.ledger_file)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Io,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        read_or_default(&self.path::<T>())
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Io,
    {
        std::fs::write(self.path::<T>(), obj.to_string())
    }

    /// Loads the store backing the ledger file named by `config`.
    pub fn open_store(&self, config: &base::Config) -> Result<base::Store, ReadError> {
        base::Store::load(self.ledger_path(config))
    }
}

/// Deserializes `T` from the file at `path`. If the file does not exist,
/// returns `T::default()`.
pub fn read_or_default<T>(path: &std::path::Path) -> Result<T, ReadError>
where
    T: Default + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match std::fs::read_to_string(path) {
        Ok(s) => s
            .parse()
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
            .map_err(ReadError::Serde),
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(T::default()),
            _ => Err(ReadError::Io(e)),
        },
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
    // This box can be removed once specialization stabilizes.
}
