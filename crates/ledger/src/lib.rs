//! Inventory ledger domain module.
//!
//! This crate contains the batch data model and the in-memory ledger store,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod batch;
pub mod store;

pub use batch::{Batch, BatchKind};
pub use store::{DecrementOutcome, LedgerStore};
