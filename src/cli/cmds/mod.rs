pub mod deposit;
pub mod init;
pub mod ledger;
pub mod payment;
pub mod report;
pub mod root;
pub mod search;
pub mod vendor;
