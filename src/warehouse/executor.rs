//! Cached Query Executor
//!
//! Composes the TTL cache with a row source. A fresh cache entry is trusted
//! for its whole window (no mid-TTL revalidation); failures surface to the
//! caller and are never cached.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheValue, TtlCache};
use crate::error::Result;
use crate::warehouse::source::{Row, RowSource};

// == Query Executor ==
/// Read-through access to the warehouse.
pub struct QueryExecutor {
    cache: Arc<RwLock<TtlCache>>,
    source: Arc<dyn RowSource>,
}

impl QueryExecutor {
    /// Creates an executor over the shared cache and a row source.
    pub fn new(cache: Arc<RwLock<TtlCache>>, source: Arc<dyn RowSource>) -> Self {
        Self { cache, source }
    }

    // == Fetch ==
    /// Returns rows for `query`, consulting the cache when a key is given.
    ///
    /// With `cache_key = None` the executor always calls through; the
    /// filtered inventory path uses this so filter parameters never need
    /// per-value keys.
    pub async fn fetch(
        &self,
        query: &str,
        cache_key: Option<&str>,
        ttl_seconds: u64,
    ) -> Result<Vec<Row>> {
        if let Some(key) = cache_key {
            // Write lock: an expired read mutates the map and the counters.
            let mut cache = self.cache.write().await;
            if let Some(CacheValue::Rows(rows)) = cache.get(key) {
                debug!(key, "warehouse cache hit");
                return Ok(rows);
            }
        }

        let rows = self.source.execute(query).await?;

        if let Some(key) = cache_key {
            debug!(key, rows = rows.len(), "caching warehouse result");
            let mut cache = self.cache.write().await;
            cache.set(key.to_string(), CacheValue::Rows(rows.clone()), ttl_seconds);
        }

        Ok(rows)
    }
}
