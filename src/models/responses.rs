//! Response DTOs for the tracking API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::routing::GeoPoint;

/// Response body for GET /api/products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    /// Distinct product names, sorted
    pub products: Vec<String>,
}

/// Response body for GET /api/statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusListResponse {
    /// The four canonical category labels
    pub statuses: Vec<String>,
}

/// One entry in the batch listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub batch_id: String,
    pub product_name: String,
}

/// Response body for GET /api/batches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchesResponse {
    pub batches: Vec<BatchSummary>,
}

/// Response body for GET /api/route
///
/// Coordinates are (latitude, longitude) pairs, start to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub coordinates: Vec<GeoPoint>,
}

/// Response body for POST /api/cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct CacheClearedResponse {
    pub message: String,
}

impl CacheClearedResponse {
    pub fn new() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

impl Default for CacheClearedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for GET /api/cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries purged on read after expiry
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a StatsResponse from cache statistics.
    pub fn new(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
