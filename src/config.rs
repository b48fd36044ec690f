//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Inventory table in the warehouse.
pub const INVENTORY_TABLE: &str = "inventory_realtime_v1";

/// Batch tracking events table in the warehouse.
pub const BATCH_EVENTS_TABLE: &str = "batch_events_v1";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Databricks workspace host (scheme optional)
    pub warehouse_host: Option<String>,
    /// Databricks access token
    pub warehouse_token: Option<String>,
    /// Databricks SQL warehouse id
    pub warehouse_id: Option<String>,
    /// Catalog prefix for table names (empty = unqualified)
    pub catalog: String,
    /// Schema prefix for table names (empty = unqualified)
    pub schema: String,
    /// TTL in seconds for warehouse-derived cache entries
    pub warehouse_ttl: u64,
    /// TTL in seconds for successful route lookups
    pub route_ttl: u64,
    /// TTL in seconds for straight-line fallback routes
    pub route_fallback_ttl: u64,
    /// Whether the unfiltered inventory base query is cached
    pub cache_inventory: bool,
    /// Base URL of the OSRM-compatible routing service
    pub routing_base_url: String,
    /// Optional bound in seconds on warehouse statement requests
    pub warehouse_timeout: Option<u64>,
    /// Directory holding the prebuilt web client, served when present
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DATABRICKS_HOST` - Warehouse workspace host
    /// - `DATABRICKS_TOKEN` - Warehouse access token
    /// - `DATABRICKS_WAREHOUSE_ID` - SQL warehouse id
    /// - `DATABRICKS_CATALOG` / `DATABRICKS_SCHEMA` - Table qualification (default: empty)
    /// - `WAREHOUSE_CACHE_TTL` - Warehouse cache TTL in seconds (default: 300)
    /// - `ROUTE_CACHE_TTL` - Route cache TTL in seconds (default: 600)
    /// - `ROUTE_FALLBACK_TTL` - Fallback route TTL in seconds (default: route TTL)
    /// - `CACHE_INVENTORY` - Cache the unfiltered inventory query (default: false)
    /// - `OSRM_BASE_URL` - Routing service base URL (default: public OSRM)
    /// - `WAREHOUSE_TIMEOUT_SECS` - Bound on warehouse requests (default: none)
    /// - `STATIC_DIR` - Web client build directory (default: "web")
    pub fn from_env() -> Self {
        let route_ttl = env::var("ROUTE_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            warehouse_host: env::var("DATABRICKS_HOST").ok().filter(|v| !v.is_empty()),
            warehouse_token: env::var("DATABRICKS_TOKEN").ok().filter(|v| !v.is_empty()),
            warehouse_id: env::var("DATABRICKS_WAREHOUSE_ID")
                .ok()
                .filter(|v| !v.is_empty()),
            catalog: env::var("DATABRICKS_CATALOG").unwrap_or_default(),
            schema: env::var("DATABRICKS_SCHEMA").unwrap_or_default(),
            warehouse_ttl: env::var("WAREHOUSE_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            route_ttl,
            route_fallback_ttl: env::var("ROUTE_FALLBACK_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(route_ttl),
            cache_inventory: env::var("CACHE_INVENTORY")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            routing_base_url: env::var("OSRM_BASE_URL")
                .unwrap_or_else(|_| "http://router.project-osrm.org".to_string()),
            warehouse_timeout: env::var("WAREHOUSE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            static_dir: Some(PathBuf::from(
                env::var("STATIC_DIR").unwrap_or_else(|_| "web".to_string()),
            )),
        }
    }

    /// Returns the fully qualified table name.
    ///
    /// Qualification only applies when both catalog and schema are set.
    pub fn qualified_table(&self, table: &str) -> String {
        if !self.catalog.is_empty() && !self.schema.is_empty() {
            format!("{}.{}.{}", self.catalog, self.schema, table)
        } else {
            table.to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            warehouse_host: None,
            warehouse_token: None,
            warehouse_id: None,
            catalog: String::new(),
            schema: String::new(),
            warehouse_ttl: 300,
            route_ttl: 600,
            route_fallback_ttl: 600,
            cache_inventory: false,
            routing_base_url: "http://router.project-osrm.org".to_string(),
            warehouse_timeout: None,
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.warehouse_ttl, 300);
        assert_eq!(config.route_ttl, 600);
        assert_eq!(config.route_fallback_ttl, 600);
        assert!(!config.cache_inventory);
        assert!(config.warehouse_timeout.is_none());
    }

    #[test]
    fn test_qualified_table_with_catalog_and_schema() {
        let config = Config {
            catalog: "main".to_string(),
            schema: "supply".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.qualified_table(INVENTORY_TABLE),
            "main.supply.inventory_realtime_v1"
        );
    }

    #[test]
    fn test_qualified_table_without_catalog() {
        let config = Config {
            schema: "supply".to_string(),
            ..Config::default()
        };
        assert_eq!(config.qualified_table(BATCH_EVENTS_TABLE), "batch_events_v1");
    }
}
