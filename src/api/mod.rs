//! API Module
//!
//! HTTP handlers and routing for the tracking API.
//!
//! # Endpoints
//! - `GET /api/inventory` - Inventory with optional filters
//! - `GET /api/inventory/summary` - Status summary
//! - `GET /api/products` - Distinct product names
//! - `GET /api/statuses` - Canonical status categories
//! - `GET /api/batch/:batch_id` - Batch tracking events
//! - `GET /api/batches` - Batch listing
//! - `GET /api/route` - Road route between two points
//! - `POST /api/cache/clear` - Administrative cache reset
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /api/health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
