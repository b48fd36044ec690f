//! Request and Response models for the tracking API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{InventoryQuery, RouteQuery};
pub use responses::{
    BatchSummary, BatchesResponse, CacheClearedResponse, HealthResponse, ProductsResponse,
    RouteResponse, StatsResponse, StatusListResponse,
};
