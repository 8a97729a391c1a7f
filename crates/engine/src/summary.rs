//! Stock summary over the current ledger.

use serde::{Deserialize, Serialize};

use crate::state::ScmState;

/// Placeholder valuation multiplier per unit of stock. Real pricing is out
/// of scope; the summary only carries a flat per-unit estimate.
pub const VALUATION_RATE: f64 = 150.0;

/// Aggregate view of the ledger at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub total_quantity: f64,
    pub batch_count: usize,
    pub estimated_value: f64,
}

impl ScmState {
    /// Totals across all active batches, with the placeholder valuation.
    pub fn stock_summary(&self) -> StockSummary {
        let total_quantity: f64 = self.ledger.all().iter().map(|b| b.quantity).sum();
        StockSummary {
            total_quantity,
            batch_count: self.ledger.len(),
            estimated_value: total_quantity * VALUATION_RATE,
        }
    }
}
