//! Row Source Module
//!
//! The "run query, get rows" capability the rest of the service consumes.

use async_trait::async_trait;

use crate::error::Result;

// == Row ==
/// One tabular result row: column name to JSON value.
///
/// Schema is whatever the query selects; typed views live in the domain
/// module.
pub type Row = serde_json::Map<String, serde_json::Value>;

// == Row Source Trait ==
/// Executes a SQL query against the warehouse.
///
/// Implementations are stateless per-call collaborators; a failed call
/// surfaces as `ApiError::DataSource` and is never retried here.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<Row>>;
}
