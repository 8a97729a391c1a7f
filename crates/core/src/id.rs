//! Strongly-typed identifiers and their generator.
//!
//! Identifiers have the shape `<prefix>-<4-digit-number>`. Suffixes come
//! from a per-prefix monotonic counter starting at 1000, so an id is never
//! reused within a process (the counter keeps climbing past 9999 and simply
//! widens instead of wrapping).

use core::str::FromStr;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ScmError;

/// Origin prefix of a batch identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPrefix {
    /// Raw material lot (`SN-RAW`).
    Raw,
    /// Finished goods lot (`SN-FIN`).
    Finished,
}

impl BatchPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            BatchPrefix::Raw => "SN-RAW",
            BatchPrefix::Finished => "SN-FIN",
        }
    }
}

/// Prefix of an order/work-order reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPrefix {
    /// Purchase order (`PO`).
    Purchase,
    /// Manufacturing work order (`MO`).
    Work,
    /// Delivery order (`DO`).
    Delivery,
}

impl OrderPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderPrefix::Purchase => "PO",
            OrderPrefix::Work => "MO",
            OrderPrefix::Delivery => "DO",
        }
    }
}

/// Identifier of a stock batch (e.g. `SN-RAW-1000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

/// Reference of a purchase/work/delivery order (e.g. `PO-1000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(String);

macro_rules! impl_prefixed_id {
    ($t:ty, $name:literal, $prefixes:expr) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            fn validate(s: &str) -> Result<(), ScmError> {
                let valid = $prefixes.iter().any(|p| {
                    s.strip_prefix(p)
                        .and_then(|rest| rest.strip_prefix('-'))
                        .is_some_and(|digits| {
                            digits.len() >= 4 && digits.bytes().all(|b| b.is_ascii_digit())
                        })
                });
                if valid {
                    Ok(())
                } else {
                    Err(ScmError::validation(format!(
                        "malformed {}: {s:?}",
                        $name
                    )))
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = ScmError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::validate(s)?;
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_prefixed_id!(BatchId, "BatchId", ["SN-RAW", "SN-FIN"]);
impl_prefixed_id!(OrderRef, "OrderRef", ["PO", "MO", "DO"]);

impl BatchId {
    /// Whether this id carries the given origin prefix.
    pub fn has_prefix(&self, prefix: BatchPrefix) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

/// Per-prefix monotonic id generator.
///
/// Counters start at 1000 so every generated suffix has at least 4 digits.
#[derive(Debug, Clone, Default)]
pub struct IdSequences {
    counters: HashMap<&'static str, u32>,
}

impl IdSequences {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_suffix(&mut self, prefix: &'static str) -> u32 {
        let counter = self.counters.entry(prefix).or_insert(1000);
        let suffix = *counter;
        *counter += 1;
        suffix
    }

    /// Generate the next batch id for the given origin prefix.
    pub fn next_batch(&mut self, prefix: BatchPrefix) -> BatchId {
        let suffix = self.next_suffix(prefix.as_str());
        BatchId(format!("{}-{suffix:04}", prefix.as_str()))
    }

    /// Generate the next order reference for the given prefix.
    pub fn next_ref(&mut self, prefix: OrderPrefix) -> OrderRef {
        let suffix = self.next_suffix(prefix.as_str());
        OrderRef(format!("{}-{suffix:04}", prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ids_are_monotonic_per_prefix() {
        let mut seq = IdSequences::new();
        let first = seq.next_batch(BatchPrefix::Raw);
        assert_eq!(first.as_str(), "SN-RAW-1000");
        assert!(first.has_prefix(BatchPrefix::Raw));
        assert!(!first.has_prefix(BatchPrefix::Finished));
        assert_eq!(seq.next_batch(BatchPrefix::Raw).as_str(), "SN-RAW-1001");
        // Independent counter per prefix.
        assert_eq!(seq.next_batch(BatchPrefix::Finished).as_str(), "SN-FIN-1000");
    }

    #[test]
    fn order_refs_are_monotonic_per_prefix() {
        let mut seq = IdSequences::new();
        assert_eq!(seq.next_ref(OrderPrefix::Purchase).as_str(), "PO-1000");
        assert_eq!(seq.next_ref(OrderPrefix::Delivery).as_str(), "DO-1000");
        assert_eq!(seq.next_ref(OrderPrefix::Purchase).as_str(), "PO-1001");
    }

    #[test]
    fn batch_id_parse_rejects_unknown_prefix() {
        assert!("SN-RAW-1000".parse::<BatchId>().is_ok());
        assert!("PO-1000".parse::<BatchId>().is_err());
        assert!("SN-RAW-12".parse::<BatchId>().is_err());
        assert!("SN-RAW-12ab".parse::<BatchId>().is_err());
    }

    #[test]
    fn order_ref_parse_rejects_malformed_input() {
        assert!("MO-1042".parse::<OrderRef>().is_ok());
        assert!("SN-FIN-1042".parse::<OrderRef>().is_err());
        assert!("MO1042".parse::<OrderRef>().is_err());
    }
}
