use std::io::Read;
use std::io::Seek;
use std::io::Write;

use crate::base;

/// A ledger bound to the file it is persisted in. Every append is written to
/// the file before it is added to memory.
#[derive(Debug)]
pub struct Store {
    path: std::path::PathBuf,
    ledger: base::Ledger,
}

#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(base::Cents),
    #[error("{0} must not contain '|' or line breaks")]
    InvalidText(&'static str),
    #[error("failed to write '{}'", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Store {
    /// Loads the ledger at `path`. A missing file yields an empty store; the
    /// file is only created by the first append.
    pub fn load<P>(path: P) -> Result<Self, base::fs::ReadError>
    where
        P: Into<std::path::PathBuf>,
    {
        let path = path.into();
        let ledger = base::fs::read_or_default::<base::Ledger>(&path)?;
        tracing::debug!(path = %path.display(), count = ledger.len(), "loaded ledger");
        Ok(Self { path, ledger })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn ledger(&self) -> &base::Ledger {
        &self.ledger
    }

    /// Writes `t` to the end of the file, then adds it to memory. If writing
    /// fails, memory is left unchanged.
    pub fn append(&mut self, t: base::Transaction) -> Result<&base::Transaction, AddError> {
        for (field, text) in [("description", t.description()), ("vendor", t.vendor())] {
            if !base::transaction::is_storable_text(text) {
                return Err(AddError::InvalidText(field));
            }
        }
        if let Err(e) = self.write_line(&t) {
            tracing::warn!(path = %self.path.display(), error = %e, "append failed");
            return Err(AddError::Io {
                path: self.path.clone(),
                source: e,
            });
        }
        tracing::debug!(path = %self.path.display(), record = %t, "appended transaction");
        self.ledger.push(t);
        Ok(self
            .ledger
            .last()
            .expect("ledger should be non-empty after push"))
    }

    fn write_line(&self, t: &base::Transaction) -> std::io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut line = format!("{}\n", t);
        // Keep records on separate lines if the file was not newline-terminated.
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(std::io::SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                line.insert(0, '\n');
            }
        }
        file.write_all(line.as_bytes())?;
        file.sync_data()
    }

    /// Records a deposit of `amount`, which must be positive.
    pub fn add_deposit(
        &mut self,
        date: base::Date,
        time: base::Time,
        description: String,
        vendor: String,
        amount: base::Cents,
    ) -> Result<&base::Transaction, AddError> {
        if !amount.is_positive() {
            return Err(AddError::InvalidAmount(amount));
        }
        self.append(base::Transaction::new(
            date,
            time,
            description,
            vendor,
            amount,
        ))
    }

    /// Records a payment. `amount` is the positive magnitude paid; it is
    /// stored negated.
    pub fn add_payment(
        &mut self,
        date: base::Date,
        time: base::Time,
        description: String,
        vendor: String,
        amount: base::Cents,
    ) -> Result<&base::Transaction, AddError> {
        if !amount.is_positive() {
            return Err(AddError::InvalidAmount(amount));
        }
        self.append(base::Transaction::new(
            date,
            time,
            description,
            vendor,
            -amount.abs(),
        ))
    }
}
