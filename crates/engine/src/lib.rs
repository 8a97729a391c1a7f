//! Transformation engine: procurement, manufacturing and sales over the
//! batch inventory ledger, plus the traceability query.
//!
//! All operations work on an explicit [`ScmState`] and are deterministic
//! domain logic; the only ambient effect is structured logging.

pub mod ops;
pub mod state;
pub mod summary;
pub mod trace;


pub use ops::{
    ManufacturingReceipt, ProcurementReceipt, SalesReceipt, FINISHED_LOCATION, FINISHED_UNIT,
    INTERNAL_PARTNER, MIN_ORDER_QUANTITY, RAW_UNIT,
};
pub use state::ScmState;
pub use summary::{StockSummary, VALUATION_RATE};
pub use trace::TraceReport;
