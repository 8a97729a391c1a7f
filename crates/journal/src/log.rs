//! Append-only transaction log.

use autochain_core::text;

use crate::entry::{TransactionEntry, TransactionKind};

/// Append-only, newest-first history of ledger-affecting operations.
///
/// There is deliberately no edit or delete API.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<TransactionEntry>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, keeping the log newest-first.
    pub fn record(&mut self, entry: TransactionEntry) {
        self.entries.insert(0, entry);
    }

    /// Full log in stored (newest-first) order.
    pub fn entries(&self) -> &[TransactionEntry] {
        &self.entries
    }

    /// Entries of one kind, in stored order.
    pub fn of_kind(&self, kind: TransactionKind) -> Vec<&TransactionEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }

    /// Entries whose details or reference contain `search`
    /// (case-insensitive), or whose related batch id matches it exactly.
    pub fn matching(&self, search: &str) -> Vec<&TransactionEntry> {
        self.entries
            .iter()
            .filter(|e| {
                text::contains_ignore_case(&e.details, search)
                    || text::contains_ignore_case(e.reference.as_str(), search)
                    || e.related_batch_id
                        .as_ref()
                        .is_some_and(|id| id.as_str().eq_ignore_ascii_case(search))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(kind: TransactionKind, reference: &str, details: &str) -> TransactionEntry {
        TransactionEntry {
            recorded_at: Utc::now(),
            kind,
            reference: reference.parse().unwrap(),
            item: "Baja Lembaran (Steel Sheet)".to_string(),
            quantity: 60.0,
            partner: "Internal".to_string(),
            details: details.to_string(),
            related_batch_id: details
                .rsplit(' ')
                .next()
                .and_then(|tail| tail.parse().ok()),
        }
    }

    #[test]
    fn record_keeps_newest_first() {
        let mut log = TransactionLog::new();
        log.record(entry(TransactionKind::Inbound, "PO-1000", "Batch: SN-RAW-1000"));
        log.record(entry(TransactionKind::Manufacturing, "MO-1000", "From SN-RAW-1000"));

        let refs: Vec<&str> = log.entries().iter().map(|e| e.reference.as_str()).collect();
        assert_eq!(refs, vec!["MO-1000", "PO-1000"]);
    }

    #[test]
    fn kind_filter_keeps_stored_order() {
        let mut log = TransactionLog::new();
        log.record(entry(TransactionKind::Inbound, "PO-1000", "Batch: SN-RAW-1000"));
        log.record(entry(TransactionKind::Outbound, "DO-1000", "Sold Batch SN-FIN-1000"));
        log.record(entry(TransactionKind::Inbound, "PO-1001", "Batch: SN-RAW-1001"));

        let inbound = log.of_kind(TransactionKind::Inbound);
        assert_eq!(inbound.len(), 2);
        assert_eq!(inbound[0].reference.as_str(), "PO-1001");
        assert_eq!(inbound[1].reference.as_str(), "PO-1000");
    }

    #[test]
    fn matching_searches_details_and_reference() {
        let mut log = TransactionLog::new();
        log.record(entry(TransactionKind::Manufacturing, "MO-1000", "From SN-RAW-1000"));
        log.record(entry(TransactionKind::Outbound, "DO-1000", "Sold Batch SN-FIN-1000"));

        // Substring on details, case-insensitive.
        assert_eq!(log.matching("sn-raw-1000").len(), 1);
        // Substring on reference.
        assert_eq!(log.matching("do-10").len(), 1);
        // Exact related batch id.
        assert_eq!(log.matching("SN-FIN-1000").len(), 1);
        // No hit.
        assert!(log.matching("SN-FIN-9999").is_empty());
    }
}
