//! Explicit application state.
//!
//! Ledger, journal and reference data live in one owned object passed by
//! reference to each operation, never in globals. `&mut ScmState` gives every
//! mutating operation exclusive access, so the single-threaded
//! read-check-then-write sequences cannot interleave.

use autochain_bom::BomRegistry;
use autochain_core::IdSequences;
use autochain_journal::TransactionLog;
use autochain_ledger::LedgerStore;
use autochain_partners::PartnerDirectory;

/// Process-scoped supply-chain state: ledger, journal, reference data and
/// the id generator. State lifetime equals process lifetime.
#[derive(Debug, Clone, Default)]
pub struct ScmState {
    pub(crate) ledger: LedgerStore,
    pub(crate) journal: TransactionLog,
    pub(crate) bom: BomRegistry,
    pub(crate) partners: PartnerDirectory,
    pub(crate) sequences: IdSequences,
}

impl ScmState {
    /// Empty state with the given reference data.
    pub fn new(bom: BomRegistry, partners: PartnerDirectory) -> Self {
        Self {
            ledger: LedgerStore::new(),
            journal: TransactionLog::new(),
            bom,
            partners,
            sequences: IdSequences::new(),
        }
    }

    /// Current ledger snapshot (read-only).
    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    /// Transaction history (read-only).
    pub fn journal(&self) -> &TransactionLog {
        &self.journal
    }

    pub fn bom(&self) -> &BomRegistry {
        &self.bom
    }

    pub fn partners(&self) -> &PartnerDirectory {
        &self.partners
    }
}
