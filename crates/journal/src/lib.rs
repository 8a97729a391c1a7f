//! Transaction journal domain module.
//!
//! Immutable audit entries plus the append-only, newest-first log they live
//! in. Entries are facts; the log offers read-only filtered views.

pub mod entry;
pub mod log;

pub use entry::{TransactionEntry, TransactionKind};
pub use log::TransactionLog;
