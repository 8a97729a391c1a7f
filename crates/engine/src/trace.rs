//! Traceability query.

use serde::{Deserialize, Serialize};

use autochain_journal::TransactionEntry;
use autochain_ledger::Batch;

use crate::state::ScmState;

/// Result of a traceability lookup: where matching stock sits now, and the
/// movement history that mentions the search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    /// Batches whose id contains the search term (case-insensitive).
    pub current_status: Vec<Batch>,
    /// Log entries whose details/reference contain the search term, or whose
    /// related batch id matches it exactly; newest first.
    pub history: Vec<TransactionEntry>,
}

impl TraceReport {
    pub fn is_empty(&self) -> bool {
        self.current_status.is_empty() && self.history.is_empty()
    }
}

impl ScmState {
    /// Recover a batch's current position and movement history.
    ///
    /// Read-only; an unmatched search returns empty sequences, not an error.
    pub fn trace(&self, search: &str) -> TraceReport {
        TraceReport {
            current_status: self.ledger.matching(search).into_iter().cloned().collect(),
            history: self.journal.matching(search).into_iter().cloned().collect(),
        }
    }
}
