//! Warehouse Module
//!
//! Query execution against the cloud data warehouse: the row-source seam,
//! the Databricks-backed implementation and the cached executor composed
//! over it.

mod databricks;
mod executor;
mod source;

pub use databricks::DatabricksSqlClient;
pub use executor::QueryExecutor;
pub use source::{Row, RowSource};
