//! Status Summary Module
//!
//! Derives headline counts and unit totals from an inventory snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::records::InventoryRecord;
use crate::domain::status::StatusCategory;

// == Status Summary ==
/// Per-category counts plus the total units on hand.
///
/// Records classified as `Other` fall outside every counter, but their
/// quantities still contribute to `total_units`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub in_transit: usize,
    pub at_dc: usize,
    pub at_dock: usize,
    pub delivered: usize,
    pub total_units: i64,
}

impl StatusSummary {
    // == From Records ==
    /// Tallies category counts and sums `qty` over all records.
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        let mut summary = Self::default();

        for record in records {
            match StatusCategory::classify(&record.status) {
                StatusCategory::InTransit => summary.in_transit += 1,
                StatusCategory::AtDc => summary.at_dc += 1,
                StatusCategory::AtDock => summary.at_dock += 1,
                StatusCategory::Delivered => summary.delivered += 1,
                StatusCategory::Other(_) => {}
            }
            summary.total_units += record.qty;
        }

        summary
    }
}
