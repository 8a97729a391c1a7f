//! Partner master data (vendors and customers).
//!
//! Informational directory the presentation layer offers as pick lists. The
//! engine only requires partner names to be non-blank; membership here is
//! not a transaction precondition.

use serde::{Deserialize, Serialize};

use autochain_core::{text, ScmError, ScmResult};

/// Partner kind: mining vendor or plant customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerKind {
    Vendor,
    Customer,
}

/// A named trading partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub kind: PartnerKind,
}

/// Directory of known partners, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PartnerDirectory {
    partners: Vec<Partner>,
}

impl PartnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, kind: PartnerKind) -> ScmResult<()> {
        let name = name.into();
        if text::is_blank(&name) {
            return Err(ScmError::validation("partner name cannot be empty"));
        }
        if self.contains(&name, kind) {
            return Err(ScmError::validation(format!(
                "partner already registered: {name}"
            )));
        }
        self.partners.push(Partner { name, kind });
        Ok(())
    }

    pub fn contains(&self, name: &str, kind: PartnerKind) -> bool {
        self.partners
            .iter()
            .any(|p| p.kind == kind && p.name == name)
    }

    pub fn vendors(&self) -> Vec<&str> {
        self.of_kind(PartnerKind::Vendor)
    }

    pub fn customers(&self) -> Vec<&str> {
        self.of_kind(PartnerKind::Customer)
    }

    fn of_kind(&self, kind: PartnerKind) -> Vec<&str> {
        self.partners
            .iter()
            .filter(|p| p.kind == kind)
            .map(|p| p.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_separates_vendors_from_customers() {
        let mut directory = PartnerDirectory::new();
        directory.add("Vale Mining", PartnerKind::Vendor).unwrap();
        directory
            .add("Toyota Manufacturing", PartnerKind::Customer)
            .unwrap();

        assert_eq!(directory.vendors(), vec!["Vale Mining"]);
        assert_eq!(directory.customers(), vec!["Toyota Manufacturing"]);
        assert!(directory.contains("Vale Mining", PartnerKind::Vendor));
        assert!(!directory.contains("Vale Mining", PartnerKind::Customer));
    }

    #[test]
    fn blank_and_duplicate_names_are_rejected() {
        let mut directory = PartnerDirectory::new();
        assert!(directory.add("  ", PartnerKind::Vendor).is_err());

        directory.add("Tambang Freeport", PartnerKind::Vendor).unwrap();
        assert!(directory.add("Tambang Freeport", PartnerKind::Vendor).is_err());
    }
}
