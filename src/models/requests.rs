//! Request DTOs for the tracking API
//!
//! Query-string parameters for the read endpoints.

use serde::Deserialize;

/// Query parameters for GET /api/inventory
///
/// Both filters are optional and applied in memory after the fetch:
/// `product` matches the exact product name, `status` matches the derived
/// category label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryQuery {
    pub product: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for GET /api/route
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}
