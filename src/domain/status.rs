//! Status Classifier Module
//!
//! Maps free-text shipment statuses onto four canonical categories.

use serde::Serialize;

/// Display labels of the four canonical categories, in classifier order.
pub const CANONICAL_LABELS: [&str; 4] = ["In Transit", "At DC", "At Dock", "Delivered"];

// == Status Category ==
/// Broad category derived from a raw status string.
///
/// Statuses that match no keyword are carried through verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StatusCategory {
    InTransit,
    AtDc,
    AtDock,
    Delivered,
    Other(String),
}

impl StatusCategory {
    // == Classify ==
    /// Classifies a raw status via case-insensitive keyword matching.
    ///
    /// First match wins, so ordering is load-bearing: "At DC Dock" lands in
    /// `AtDc`, and so does anything containing the bare substring "dc".
    pub fn classify(status: &str) -> Self {
        let lower = status.to_lowercase();
        if lower.contains("in transit") || lower.contains("transit") {
            Self::InTransit
        } else if lower.contains("at dc") || lower.contains("dc") {
            Self::AtDc
        } else if lower.contains("dock") {
            Self::AtDock
        } else if lower.contains("delivered") {
            Self::Delivered
        } else {
            Self::Other(status.to_string())
        }
    }

    // == Label ==
    /// Display label used for filtering and API responses.
    pub fn label(&self) -> &str {
        match self {
            Self::InTransit => "In Transit",
            Self::AtDc => "At DC",
            Self::AtDock => "At Dock",
            Self::Delivered => "Delivered",
            Self::Other(original) => original,
        }
    }
}
