//! Domain Module
//!
//! Typed inventory records, the status keyword classifier and the derived
//! status summary.

pub mod records;
pub mod status;
pub mod summary;

pub use records::{from_rows, BatchEvent, InventoryRecord};
pub use status::{StatusCategory, CANONICAL_LABELS};
pub use summary::StatusSummary;
