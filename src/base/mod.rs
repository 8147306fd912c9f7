pub mod cents;
mod charset;
mod config;
pub mod date;
mod datepart;
pub mod fs;
mod interval;
pub mod ledger;
mod query;
mod report;
pub mod store;
pub mod table;
pub mod transaction;
pub mod util;
pub mod walltime;

pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use fs::Fs;
pub use interval::Interval;
pub use ledger::Ledger;
pub use query::Query;
pub use report::Report;
pub use store::Store;
pub use transaction::Transaction;
pub use walltime::Time;
