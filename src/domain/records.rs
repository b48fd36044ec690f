//! Domain Records Module
//!
//! Typed views over warehouse rows. The core never writes these back; it
//! reads `status` and `qty` to derive categories and aggregates and passes
//! the rest through to the client.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::warehouse::Row;

// == Inventory Record ==
/// One live inventory position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub record_id: i64,
    pub reference_number: String,
    pub product_id: String,
    pub product_name: String,
    pub status: String,
    pub qty: i64,
    pub unit_price: f64,
    pub current_location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub destination: String,
    #[serde(default)]
    pub time_remaining_to_destination_hours: Option<f64>,
    pub last_updated_cst: String,
    #[serde(default)]
    pub expected_arrival_time: Option<String>,
    pub batch_id: String,
    /// Derived category label, filled in by the API layer
    #[serde(default)]
    pub status_category: Option<String>,
}

// == Batch Event ==
/// One tracked event in a batch's journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEvent {
    pub record_id: i64,
    pub batch_id: String,
    pub product_id: String,
    pub product_name: String,
    pub event: String,
    pub event_time_cst: String,
    pub entity_involved: String,
    pub entity_name: String,
    pub entity_location: String,
    pub entity_latitude: f64,
    pub entity_longitude: f64,
    pub event_time_cst_readable: String,
}

// == Row Conversion ==
/// Deserializes warehouse rows into typed records.
pub fn from_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(Value::Object(row))
                .map_err(|e| ApiError::Internal(format!("Malformed warehouse row: {e}")))
        })
        .collect()
}
