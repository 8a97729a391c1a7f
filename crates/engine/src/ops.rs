//! Transformation engine operations.
//!
//! Procurement, Manufacturing and Sales each run as one synchronous step:
//! every precondition is checked before the first mutation, so a failed call
//! leaves ledger and journal untouched, and every successful call records
//! exactly one transaction entry.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use autochain_core::{text, BatchId, BatchPrefix, OrderPrefix, OrderRef, ScmError, ScmResult};
use autochain_journal::{TransactionEntry, TransactionKind};
use autochain_ledger::{Batch, BatchKind};

use crate::state::ScmState;

/// Minimum order policy for inbound procurement.
pub const MIN_ORDER_QUANTITY: f64 = 10.0;

/// Display unit for raw-material lots.
pub const RAW_UNIT: &str = "Ton";

/// Display unit for finished-goods lots.
pub const FINISHED_UNIT: &str = "Unit/Roll";

/// Fixed destination for manufactured output.
pub const FINISHED_LOCATION: &str = "Gudang C (Outbound)";

/// Partner recorded on internal (manufacturing) transactions.
pub const INTERNAL_PARTNER: &str = "Internal";

/// Outcome of a procurement operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementReceipt {
    pub batch_id: BatchId,
    pub reference: OrderRef,
}

/// Outcome of a manufacturing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingReceipt {
    pub source_batch_id: BatchId,
    pub produced_batch_id: BatchId,
    pub reference: OrderRef,
    pub output_quantity: f64,
    /// Whether the source batch was fully consumed and removed.
    pub source_removed: bool,
}

/// Outcome of a sales operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReceipt {
    pub batch_id: BatchId,
    pub reference: OrderRef,
    /// Whether the sold batch was fully consumed and removed.
    pub batch_removed: bool,
    pub remaining_quantity: f64,
}

impl ScmState {
    /// Receive a raw-material lot from a vendor.
    ///
    /// Generates an `SN-RAW` batch and a `PO` reference, inserts the batch
    /// and records one Inbound entry. Enforces the minimum order quantity.
    pub fn procure(
        &mut self,
        vendor: &str,
        item: &str,
        quantity: f64,
        location: &str,
    ) -> ScmResult<ProcurementReceipt> {
        if text::is_blank(vendor) {
            return Err(ScmError::validation("vendor cannot be empty"));
        }
        if text::is_blank(item) {
            return Err(ScmError::validation("item cannot be empty"));
        }
        if text::is_blank(location) {
            return Err(ScmError::validation("location cannot be empty"));
        }
        if !quantity.is_finite() || quantity < MIN_ORDER_QUANTITY {
            return Err(ScmError::validation(format!(
                "order quantity must be at least {MIN_ORDER_QUANTITY}, got {quantity}"
            )));
        }

        let batch_id = self.sequences.next_batch(BatchPrefix::Raw);
        self.ledger.insert(Batch {
            batch_id: batch_id.clone(),
            item: item.to_string(),
            kind: BatchKind::RawMaterial,
            quantity,
            unit: RAW_UNIT.to_string(),
            location: location.to_string(),
            source_batch_id: None,
        })?;

        let reference = self.sequences.next_ref(OrderPrefix::Purchase);
        self.journal.record(TransactionEntry {
            recorded_at: Utc::now(),
            kind: TransactionKind::Inbound,
            reference: reference.clone(),
            item: item.to_string(),
            quantity,
            partner: vendor.to_string(),
            details: format!("Batch: {batch_id}"),
            related_batch_id: Some(batch_id.clone()),
        });

        tracing::info!(
            batch_id = %batch_id,
            reference = %reference,
            vendor,
            quantity,
            "raw material received"
        );

        Ok(ProcurementReceipt {
            batch_id,
            reference,
        })
    }

    /// Convert part of a raw batch into finished goods per its BOM rule.
    ///
    /// Consumes `quantity` from the source batch (removing it once empty),
    /// inserts a new `SN-FIN` batch holding `quantity * yield_ratio`, and
    /// records one Manufacturing entry carrying the source batch lineage.
    pub fn manufacture(
        &mut self,
        source_batch_id: &BatchId,
        quantity: f64,
    ) -> ScmResult<ManufacturingReceipt> {
        let (source_item, available) = {
            let source = self
                .ledger
                .get(source_batch_id)
                .filter(|b| b.kind == BatchKind::RawMaterial)
                .ok_or_else(|| {
                    ScmError::not_found(format!("raw material batch {source_batch_id}"))
                })?;
            (source.item.clone(), source.quantity)
        };

        let rule = self.bom.lookup(&source_item)?.clone();

        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ScmError::invalid_quantity(format!(
                "quantity to process must be positive, got {quantity}"
            )));
        }
        if quantity > available {
            return Err(ScmError::invalid_quantity(format!(
                "quantity to process ({quantity}) exceeds stock of {source_batch_id} ({available})"
            )));
        }

        // No rounding: fractional output is carried as-is.
        let output_quantity = quantity * rule.yield_ratio;

        let outcome = self.ledger.decrement(source_batch_id, quantity)?;

        let produced_batch_id = self.sequences.next_batch(BatchPrefix::Finished);
        self.ledger.insert(Batch {
            batch_id: produced_batch_id.clone(),
            item: rule.output_item.clone(),
            kind: BatchKind::FinishedGoods,
            quantity: output_quantity,
            unit: FINISHED_UNIT.to_string(),
            location: FINISHED_LOCATION.to_string(),
            source_batch_id: Some(source_batch_id.clone()),
        })?;

        let reference = self.sequences.next_ref(OrderPrefix::Work);
        self.journal.record(TransactionEntry {
            recorded_at: Utc::now(),
            kind: TransactionKind::Manufacturing,
            reference: reference.clone(),
            item: rule.output_item,
            quantity: output_quantity,
            partner: INTERNAL_PARTNER.to_string(),
            details: format!("From {source_batch_id}"),
            related_batch_id: Some(source_batch_id.clone()),
        });

        tracing::info!(
            source_batch_id = %source_batch_id,
            produced_batch_id = %produced_batch_id,
            reference = %reference,
            consumed = quantity,
            produced = output_quantity,
            "production run completed"
        );

        Ok(ManufacturingReceipt {
            source_batch_id: source_batch_id.clone(),
            produced_batch_id,
            reference,
            output_quantity,
            source_removed: outcome.removed,
        })
    }

    /// Ship part of a finished-goods batch to a customer.
    ///
    /// Decrements the batch (removing it once empty), generates a `DO`
    /// reference and records one Outbound entry.
    pub fn sell(
        &mut self,
        customer: &str,
        batch_id: &BatchId,
        quantity: f64,
    ) -> ScmResult<SalesReceipt> {
        if text::is_blank(customer) {
            return Err(ScmError::validation("customer cannot be empty"));
        }

        let (item, available) = {
            let batch = self
                .ledger
                .get(batch_id)
                .filter(|b| b.kind == BatchKind::FinishedGoods)
                .ok_or_else(|| {
                    ScmError::not_found(format!("finished goods batch {batch_id}"))
                })?;
            (batch.item.clone(), batch.quantity)
        };

        // Covers the zero-stock case: quantity > 0 and quantity <= available
        // can never both hold for an empty batch.
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ScmError::invalid_quantity(format!(
                "quantity to send must be positive, got {quantity}"
            )));
        }
        if quantity > available {
            return Err(ScmError::invalid_quantity(format!(
                "quantity to send ({quantity}) exceeds stock of {batch_id} ({available})"
            )));
        }

        let outcome = self.ledger.decrement(batch_id, quantity)?;

        let reference = self.sequences.next_ref(OrderPrefix::Delivery);
        self.journal.record(TransactionEntry {
            recorded_at: Utc::now(),
            kind: TransactionKind::Outbound,
            reference: reference.clone(),
            item,
            quantity,
            partner: customer.to_string(),
            details: format!("Sold Batch {batch_id}"),
            related_batch_id: Some(batch_id.clone()),
        });

        tracing::info!(
            batch_id = %batch_id,
            reference = %reference,
            customer,
            quantity,
            removed = outcome.removed,
            "delivery order created"
        );

        Ok(SalesReceipt {
            batch_id: batch_id.clone(),
            reference,
            batch_removed: outcome.removed,
            remaining_quantity: outcome.remaining,
        })
    }
}
