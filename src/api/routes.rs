//! API Routes
//!
//! Configures the Axum router with all tracking API endpoints and, when a
//! web build directory is present, the static single-page client.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::handlers::{
    batch_events_handler, batches_handler, cache_stats_handler, clear_cache_handler,
    health_handler, inventory_handler, inventory_summary_handler, products_handler, route_handler,
    statuses_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/inventory` - Inventory with optional product/status filters
/// - `GET /api/inventory/summary` - Category counts and total units
/// - `GET /api/products` - Distinct product names
/// - `GET /api/statuses` - Canonical status category labels
/// - `GET /api/batch/:batch_id` - Tracking events for one batch
/// - `GET /api/batches` - Distinct batch ids with product names
/// - `GET /api/route` - Driving route between two coordinates
/// - `POST /api/cache/clear` - Administrative cache reset
/// - `GET /api/cache/stats` - Cache statistics
/// - `GET /api/health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
///
/// Non-API paths fall back to the static web client when the configured
/// build directory exists, with index.html serving unknown SPA routes.
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state
        .config
        .static_dir
        .clone()
        .filter(|dir| dir.is_dir());

    // Build router with all endpoints
    let mut router = Router::new()
        .route("/api/inventory", get(inventory_handler))
        .route("/api/inventory/summary", get(inventory_summary_handler))
        .route("/api/products", get(products_handler))
        .route("/api/statuses", get(statuses_handler))
        .route("/api/batch/:batch_id", get(batch_events_handler))
        .route("/api/batches", get(batches_handler))
        .route("/api/route", get(route_handler))
        .route("/api/cache/clear", post(clear_cache_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/api/health", get(health_handler))
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).not_found_service(index));
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}
