use serde::{Deserialize, Serialize};

use autochain_core::BatchId;

/// Position of a batch in the supply chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    RawMaterial,
    FinishedGoods,
}

/// A tracked lot of material or product.
///
/// `quantity` is unit-less beyond the `unit` display label; the ledger store
/// guarantees it stays strictly positive for every batch it holds. Derived
/// (finished-goods) batches carry an explicit provenance link to the raw
/// batch they were produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub batch_id: BatchId,
    pub item: String,
    pub kind: BatchKind,
    pub quantity: f64,
    pub unit: String,
    pub location: String,
    pub source_batch_id: Option<BatchId>,
}
