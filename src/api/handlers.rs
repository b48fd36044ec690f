//! API Handlers
//!
//! HTTP request handlers for each tracking API endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::TtlCache;
use crate::config::{Config, BATCH_EVENTS_TABLE, INVENTORY_TABLE};
use crate::domain::{from_rows, BatchEvent, InventoryRecord, StatusCategory, StatusSummary, CANONICAL_LABELS};
use crate::error::{ApiError, Result};
use crate::models::{
    BatchesResponse, CacheClearedResponse, HealthResponse, InventoryQuery, ProductsResponse,
    RouteQuery, RouteResponse, StatsResponse, StatusListResponse,
};
use crate::routing::{OsrmClient, RouteFetcher, RoutingApi};
use crate::warehouse::{DatabricksSqlClient, QueryExecutor, RowSource};

/// Application state shared across all handlers.
///
/// The cache is the only shared mutable resource; the executor and route
/// fetcher hold clones of the same `Arc<RwLock<_>>` so a clear invalidates
/// everything at once.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe TTL cache
    pub cache: Arc<RwLock<TtlCache>>,
    /// Read-through warehouse access
    pub executor: Arc<QueryExecutor>,
    /// Cached route lookups
    pub routes: Arc<RouteFetcher>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState over explicit collaborators.
    ///
    /// Tests inject mock row sources and routing clients here.
    pub fn new(config: Config, source: Arc<dyn RowSource>, routing: Arc<dyn RoutingApi>) -> Self {
        let config = Arc::new(config);
        let cache = Arc::new(RwLock::new(TtlCache::new()));
        let executor = Arc::new(QueryExecutor::new(cache.clone(), source));
        let routes = Arc::new(RouteFetcher::new(
            cache.clone(),
            routing,
            config.route_ttl,
            config.route_fallback_ttl,
        ));

        Self {
            cache,
            executor,
            routes,
            config,
        }
    }

    /// Creates a new AppState with the production collaborators.
    pub fn from_config(config: &Config) -> Self {
        let source = Arc::new(DatabricksSqlClient::new(Arc::new(config.clone())));
        let routing = Arc::new(OsrmClient::new(&config.routing_base_url));
        Self::new(config.clone(), source, routing)
    }
}

/// Base inventory query plus its cache key under the configured policy.
///
/// Inventory stays always-fresh unless `cache_inventory` opts in.
fn base_inventory_fetch(config: &Config) -> (String, Option<&'static str>) {
    let table = config.qualified_table(INVENTORY_TABLE);
    let query = format!("SELECT * FROM {table}");
    let cache_key = config.cache_inventory.then_some("inventory_base");
    (query, cache_key)
}

/// Handler for GET /api/inventory
///
/// Returns the live inventory with a derived `status_category` per record.
/// Filters are applied in memory after the fetch, so filtered requests reuse
/// the same base query as unfiltered ones.
pub async fn inventory_handler(
    State(state): State<AppState>,
    Query(params): Query<InventoryQuery>,
) -> Result<Json<Vec<InventoryRecord>>> {
    let (query, cache_key) = base_inventory_fetch(&state.config);
    let rows = state
        .executor
        .fetch(&query, cache_key, state.config.warehouse_ttl)
        .await?;

    let mut records: Vec<InventoryRecord> = from_rows(rows)?;
    for record in &mut records {
        record.status_category =
            Some(StatusCategory::classify(&record.status).label().to_string());
    }

    if let Some(product) = &params.product {
        records.retain(|r| &r.product_name == product);
    }
    if let Some(status) = &params.status {
        records.retain(|r| r.status_category.as_deref() == Some(status.as_str()));
    }

    Ok(Json(records))
}

/// Handler for GET /api/inventory/summary
///
/// Category counts plus total units over the full inventory.
pub async fn inventory_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusSummary>> {
    let (query, cache_key) = base_inventory_fetch(&state.config);
    let rows = state
        .executor
        .fetch(&query, cache_key, state.config.warehouse_ttl)
        .await?;

    let records: Vec<InventoryRecord> = from_rows(rows)?;
    Ok(Json(StatusSummary::from_records(&records)))
}

/// Handler for GET /api/products
///
/// Distinct product names, sorted, cached under `products_list`.
pub async fn products_handler(State(state): State<AppState>) -> Result<Json<ProductsResponse>> {
    let table = state.config.qualified_table(INVENTORY_TABLE);
    let query = format!("SELECT DISTINCT product_name FROM {table}");
    let rows = state
        .executor
        .fetch(&query, Some("products_list"), state.config.warehouse_ttl)
        .await?;

    let mut products: Vec<String> = rows
        .iter()
        .filter_map(|row| row.get("product_name").and_then(|v| v.as_str()))
        .map(str::to_string)
        .collect();
    products.sort();

    Ok(Json(ProductsResponse { products }))
}

/// Handler for GET /api/statuses
///
/// The canonical category labels; no warehouse round trip.
pub async fn statuses_handler() -> Json<StatusListResponse> {
    Json(StatusListResponse {
        statuses: CANONICAL_LABELS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Handler for GET /api/batch/:batch_id
///
/// Tracking events for one batch, ordered by event time and cached per
/// batch id. An empty result set is reported as 404 here at the boundary.
pub async fn batch_events_handler(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> Result<Json<Vec<BatchEvent>>> {
    let table = state.config.qualified_table(BATCH_EVENTS_TABLE);
    let query =
        format!("SELECT * FROM {table} WHERE batch_id = '{batch_id}' ORDER BY event_time_cst");
    let cache_key = format!("batch_{batch_id}");

    let rows = state
        .executor
        .fetch(&query, Some(cache_key.as_str()), state.config.warehouse_ttl)
        .await?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("Batch not found".to_string()));
    }

    Ok(Json(from_rows(rows)?))
}

/// Handler for GET /api/batches
///
/// Distinct batch ids with their product names, cached under `batches_list`.
pub async fn batches_handler(State(state): State<AppState>) -> Result<Json<BatchesResponse>> {
    let table = state.config.qualified_table(BATCH_EVENTS_TABLE);
    let query = format!("SELECT DISTINCT batch_id, product_name FROM {table}");
    let rows = state
        .executor
        .fetch(&query, Some("batches_list"), state.config.warehouse_ttl)
        .await?;

    Ok(Json(BatchesResponse {
        batches: from_rows(rows)?,
    }))
}

/// Handler for GET /api/route
///
/// Driving route between two points; degrades to a straight line when the
/// routing service is unavailable, so this endpoint never fails.
pub async fn route_handler(
    State(state): State<AppState>,
    Query(params): Query<RouteQuery>,
) -> Json<RouteResponse> {
    let coordinates = state
        .routes
        .get_route(params.lat1, params.lon1, params.lat2, params.lon2)
        .await;

    Json(RouteResponse { coordinates })
}

/// Handler for POST /api/cache/clear
///
/// Administrative reset of every cached entry.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<CacheClearedResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();
    info!("cache cleared by administrative request");

    Json(CacheClearedResponse::new())
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats()))
}

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
