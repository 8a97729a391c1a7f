//! Demo seed data.
//!
//! Mirrors the reference dataset: two raw-material lots, two BOM recipes,
//! and the vendor/customer master lists. Opening stock is routed through the
//! engine itself so the ledger and journal stay consistent.

use anyhow::Context;

use autochain_bom::BomRegistry;
use autochain_engine::ScmState;
use autochain_partners::{PartnerDirectory, PartnerKind};

const VENDORS: [&str; 3] = ["Tambang Freeport", "Vale Mining", "Borneo Coal & Mineral"];
const CUSTOMERS: [&str; 3] = [
    "Toyota Manufacturing",
    "Hyundai Motor Plant",
    "Tesla Gigafactory Indo",
];

pub fn demo_state() -> anyhow::Result<ScmState> {
    let mut bom = BomRegistry::new();
    bom.register("Bijih Besi (Iron Ore)", "Baja Lembaran (Steel Sheet)", 0.6)?;
    bom.register("Lithium Crude", "Katoda Baterai EV", 0.4)?;

    let mut partners = PartnerDirectory::new();
    for vendor in VENDORS {
        partners.add(vendor, PartnerKind::Vendor)?;
    }
    for customer in CUSTOMERS {
        partners.add(customer, PartnerKind::Customer)?;
    }

    let mut state = ScmState::new(bom, partners);

    state
        .procure(
            "Tambang Freeport",
            "Bijih Besi (Iron Ore)",
            5000.0,
            "Gudang A (Inbound)",
        )
        .context("seeding iron ore stock")?;
    state
        .procure(
            "Vale Mining",
            "Lithium Crude",
            2000.0,
            "Gudang B (Hazardous)",
        )
        .context("seeding lithium stock")?;

    Ok(state)
}
