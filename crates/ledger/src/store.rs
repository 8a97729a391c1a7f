//! In-memory ledger of active batches.

use autochain_core::{text, BatchId, ScmError, ScmResult};

use crate::batch::{Batch, BatchKind};

/// Residue below this is treated as zero when deciding batch removal.
///
/// Quantities are `f64` because BOM yield ratios produce fractional outputs;
/// repeated decrements can leave float residue that must not keep a
/// logically-empty batch alive.
const QTY_EPSILON: f64 = 1e-9;

/// Result of a [`LedgerStore::decrement`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecrementOutcome {
    /// Whether the batch was removed because its quantity reached zero.
    pub removed: bool,
    /// Quantity left on the batch (0.0 when removed).
    pub remaining: f64,
}

/// Current-state collection of all active batches.
///
/// Batches are kept in insertion order; queries never sort. All mutations
/// are immediately visible to subsequent reads.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    batches: Vec<Batch>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new batch to the ledger.
    ///
    /// Rejects non-positive or non-finite quantities, blank required fields,
    /// and duplicate ids.
    pub fn insert(&mut self, batch: Batch) -> ScmResult<()> {
        if !batch.quantity.is_finite() || batch.quantity <= 0.0 {
            return Err(ScmError::validation(format!(
                "batch quantity must be positive, got {}",
                batch.quantity
            )));
        }
        if text::is_blank(&batch.item) {
            return Err(ScmError::validation("batch item cannot be empty"));
        }
        if text::is_blank(&batch.unit) {
            return Err(ScmError::validation("batch unit cannot be empty"));
        }
        if text::is_blank(&batch.location) {
            return Err(ScmError::validation("batch location cannot be empty"));
        }
        if self.get(&batch.batch_id).is_some() {
            return Err(ScmError::validation(format!(
                "batch id already in ledger: {}",
                batch.batch_id
            )));
        }

        self.batches.push(batch);
        Ok(())
    }

    /// Draw down `amount` from the batch, removing it once empty.
    ///
    /// `amount` must be strictly positive and must not exceed the current
    /// quantity; callers clamp to available stock before calling.
    pub fn decrement(&mut self, batch_id: &BatchId, amount: f64) -> ScmResult<DecrementOutcome> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ScmError::invalid_quantity(format!(
                "decrement amount must be positive, got {amount}"
            )));
        }

        let idx = self
            .batches
            .iter()
            .position(|b| b.batch_id == *batch_id)
            .ok_or_else(|| ScmError::not_found(format!("batch {batch_id}")))?;

        let available = self.batches[idx].quantity;
        if amount > available + QTY_EPSILON {
            return Err(ScmError::InsufficientStock {
                batch_id: batch_id.to_string(),
                requested: amount,
                available,
            });
        }

        let remaining = available - amount;
        if remaining <= QTY_EPSILON {
            self.batches.remove(idx);
            Ok(DecrementOutcome {
                removed: true,
                remaining: 0.0,
            })
        } else {
            self.batches[idx].quantity = remaining;
            Ok(DecrementOutcome {
                removed: false,
                remaining,
            })
        }
    }

    /// All batches, in insertion order.
    pub fn all(&self) -> &[Batch] {
        &self.batches
    }

    /// Batches of the given kind, in insertion order.
    pub fn of_kind(&self, kind: BatchKind) -> Vec<&Batch> {
        self.batches.iter().filter(|b| b.kind == kind).collect()
    }

    /// Exact lookup by id.
    pub fn get(&self, batch_id: &BatchId) -> Option<&Batch> {
        self.batches.iter().find(|b| b.batch_id == *batch_id)
    }

    /// Batches whose id contains `search` (case-insensitive).
    pub fn matching(&self, search: &str) -> Vec<&Batch> {
        self.batches
            .iter()
            .filter(|b| text::contains_ignore_case(b.batch_id.as_str(), search))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw_batch(id: &str, quantity: f64) -> Batch {
        Batch {
            batch_id: id.parse().unwrap(),
            item: "Bijih Besi (Iron Ore)".to_string(),
            kind: BatchKind::RawMaterial,
            quantity,
            unit: "Ton".to_string(),
            location: "Gudang A (Inbound)".to_string(),
            source_batch_id: None,
        }
    }

    #[test]
    fn insert_rejects_non_positive_quantity() {
        let mut ledger = LedgerStore::new();
        let err = ledger.insert(raw_batch("SN-RAW-1000", 0.0)).unwrap_err();
        assert!(matches!(err, ScmError::Validation(_)));

        let err = ledger.insert(raw_batch("SN-RAW-1000", -5.0)).unwrap_err();
        assert!(matches!(err, ScmError::Validation(_)));
    }

    #[test]
    fn insert_rejects_blank_fields_and_duplicate_ids() {
        let mut ledger = LedgerStore::new();

        let mut blank = raw_batch("SN-RAW-1000", 10.0);
        blank.location = "  ".to_string();
        assert!(matches!(
            ledger.insert(blank).unwrap_err(),
            ScmError::Validation(_)
        ));

        ledger.insert(raw_batch("SN-RAW-1000", 10.0)).unwrap();
        let err = ledger.insert(raw_batch("SN-RAW-1000", 20.0)).unwrap_err();
        assert!(matches!(err, ScmError::Validation(_)));
    }

    #[test]
    fn partial_decrement_keeps_batch_with_reduced_quantity() {
        let mut ledger = LedgerStore::new();
        ledger.insert(raw_batch("SN-RAW-1000", 100.0)).unwrap();

        let outcome = ledger
            .decrement(&"SN-RAW-1000".parse().unwrap(), 40.0)
            .unwrap();
        assert!(!outcome.removed);
        assert_eq!(outcome.remaining, 60.0);
        assert_eq!(
            ledger.get(&"SN-RAW-1000".parse().unwrap()).unwrap().quantity,
            60.0
        );
    }

    #[test]
    fn full_decrement_removes_the_batch() {
        let mut ledger = LedgerStore::new();
        ledger.insert(raw_batch("SN-RAW-1000", 100.0)).unwrap();

        let outcome = ledger
            .decrement(&"SN-RAW-1000".parse().unwrap(), 100.0)
            .unwrap();
        assert!(outcome.removed);
        assert!(ledger.get(&"SN-RAW-1000".parse().unwrap()).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn over_decrement_fails_and_leaves_ledger_unchanged() {
        let mut ledger = LedgerStore::new();
        ledger.insert(raw_batch("SN-RAW-1000", 60.0)).unwrap();

        let err = ledger
            .decrement(&"SN-RAW-1000".parse().unwrap(), 70.0)
            .unwrap_err();
        assert!(matches!(err, ScmError::InsufficientStock { .. }));
        assert_eq!(
            ledger.get(&"SN-RAW-1000".parse().unwrap()).unwrap().quantity,
            60.0
        );
    }

    #[test]
    fn decrement_of_unknown_batch_is_not_found() {
        let mut ledger = LedgerStore::new();
        let err = ledger
            .decrement(&"SN-RAW-9999".parse().unwrap(), 1.0)
            .unwrap_err();
        assert!(matches!(err, ScmError::NotFound(_)));
    }

    #[test]
    fn zero_and_negative_decrements_are_invalid() {
        let mut ledger = LedgerStore::new();
        ledger.insert(raw_batch("SN-RAW-1000", 10.0)).unwrap();

        for amount in [0.0, -3.0, f64::NAN] {
            let err = ledger
                .decrement(&"SN-RAW-1000".parse().unwrap(), amount)
                .unwrap_err();
            assert!(matches!(err, ScmError::InvalidQuantity(_)));
        }
    }

    #[test]
    fn kind_query_preserves_insertion_order() {
        let mut ledger = LedgerStore::new();
        ledger.insert(raw_batch("SN-RAW-1001", 10.0)).unwrap();
        let mut fin = raw_batch("SN-FIN-1000", 5.0);
        fin.kind = BatchKind::FinishedGoods;
        ledger.insert(fin).unwrap();
        ledger.insert(raw_batch("SN-RAW-1000", 20.0)).unwrap();

        let raw: Vec<&str> = ledger
            .of_kind(BatchKind::RawMaterial)
            .iter()
            .map(|b| b.batch_id.as_str())
            .collect();
        assert_eq!(raw, vec!["SN-RAW-1001", "SN-RAW-1000"]);
    }

    #[test]
    fn substring_query_is_case_insensitive() {
        let mut ledger = LedgerStore::new();
        ledger.insert(raw_batch("SN-RAW-1000", 10.0)).unwrap();

        assert_eq!(ledger.matching("sn-raw-10").len(), 1);
        assert_eq!(ledger.matching("RAW-1000").len(), 1);
        assert!(ledger.matching("SN-FIN").is_empty());
    }

    proptest! {
        /// Property: no sequence of valid decrements ever leaves a
        /// non-positive batch in the ledger.
        #[test]
        fn decrements_never_leave_non_positive_batches(
            initial in 1.0f64..10_000.0,
            draws in prop::collection::vec(0.01f64..1.0, 1..40)
        ) {
            let mut ledger = LedgerStore::new();
            ledger.insert(raw_batch("SN-RAW-1000", initial)).unwrap();
            let id: BatchId = "SN-RAW-1000".parse().unwrap();

            for fraction in draws {
                let Some(batch) = ledger.get(&id) else { break };
                // Clamp to available stock, as engine callers do.
                let amount = (batch.quantity * fraction).max(0.001).min(batch.quantity);
                ledger.decrement(&id, amount).unwrap();
            }

            for batch in ledger.all() {
                prop_assert!(batch.quantity > 0.0);
            }
        }
    }
}
