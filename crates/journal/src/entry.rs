use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use autochain_core::{BatchId, OrderRef};

/// Direction of a ledger-affecting operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Inbound,
    Manufacturing,
    Outbound,
}

/// An immutable audit record of one ledger mutation.
///
/// Entries are facts: created once, never edited or deleted. `details` is a
/// human-readable lineage line; `related_batch_id` is the explicit link used
/// for exact-match traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub recorded_at: DateTime<Utc>,
    pub kind: TransactionKind,
    pub reference: OrderRef,
    pub item: String,
    pub quantity: f64,
    pub partner: String,
    pub details: String,
    pub related_batch_id: Option<BatchId>,
}
