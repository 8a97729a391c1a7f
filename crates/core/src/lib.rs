//! `autochain-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, prefixed identifiers and their generator, and small text
//! helpers used by the query paths.

pub mod error;
pub mod id;
pub mod text;

pub use error::{ScmError, ScmResult};
pub use id::{BatchId, BatchPrefix, IdSequences, OrderPrefix, OrderRef};
