//! Databricks Row Source
//!
//! Executes statements through the Databricks SQL Statement Execution REST
//! API and assembles the inline result into rows. Credentials are resolved
//! per call; a misconfigured deployment fails at request time, not startup.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::warehouse::source::{Row, RowSource};

// == Databricks Client ==
/// Row source backed by a Databricks SQL warehouse.
pub struct DatabricksSqlClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl DatabricksSqlClient {
    /// Creates a client over the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Resolves warehouse credentials, failing like a missing-config request.
    fn credentials(&self) -> Result<(String, &str, &str)> {
        match (
            self.config.warehouse_host.as_deref(),
            self.config.warehouse_token.as_deref(),
            self.config.warehouse_id.as_deref(),
        ) {
            (Some(host), Some(token), Some(warehouse_id)) => {
                Ok((normalize_host(host), token, warehouse_id))
            }
            _ => Err(ApiError::Config(
                "Databricks credentials not configured".to_string(),
            )),
        }
    }
}

#[async_trait]
impl RowSource for DatabricksSqlClient {
    async fn execute(&self, query: &str) -> Result<Vec<Row>> {
        let (host, token, warehouse_id) = self.credentials()?;
        let url = format!("{host}/api/2.0/sql/statements");

        let body = json!({
            "statement": query,
            "warehouse_id": warehouse_id,
            "wait_timeout": "50s",
            "on_wait_timeout": "CANCEL",
            "disposition": "INLINE",
            "format": "JSON_ARRAY",
        });

        let mut request = self.http.post(&url).bearer_auth(token).json(&body);
        if let Some(secs) = self.config.warehouse_timeout {
            request = request.timeout(Duration::from_secs(secs));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::DataSource(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApiError::DataSource(format!(
                "warehouse returned HTTP {status}: {detail}"
            )));
        }

        let statement: StatementResponse = response
            .json()
            .await
            .map_err(|e| ApiError::DataSource(format!("malformed warehouse response: {e}")))?;

        rows_from_statement(statement)
    }
}

// == Response Shapes ==
#[derive(Debug, Deserialize)]
struct StatementResponse {
    status: StatementStatus,
    manifest: Option<Manifest>,
    result: Option<ResultData>,
}

#[derive(Debug, Deserialize)]
struct StatementStatus {
    state: String,
    error: Option<StatementError>,
}

#[derive(Debug, Deserialize)]
struct StatementError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    schema: Schema,
}

#[derive(Debug, Deserialize)]
struct Schema {
    columns: Vec<Column>,
}

#[derive(Debug, Deserialize)]
struct Column {
    name: String,
    type_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultData {
    #[serde(default)]
    data_array: Vec<Vec<Option<String>>>,
}

// == Result Assembly ==
/// Turns a finished statement into rows, or a data-source error.
fn rows_from_statement(statement: StatementResponse) -> Result<Vec<Row>> {
    if statement.status.state != "SUCCEEDED" {
        let message = statement
            .status
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("statement finished in state {}", statement.status.state));
        return Err(ApiError::DataSource(message));
    }

    let columns = statement
        .manifest
        .map(|m| m.schema.columns)
        .unwrap_or_default();
    let data = statement.result.map(|r| r.data_array).unwrap_or_default();

    let rows = data
        .into_iter()
        .map(|values| {
            columns
                .iter()
                .zip(values)
                .map(|(column, raw)| {
                    (
                        column.name.clone(),
                        coerce(raw, column.type_name.as_deref().unwrap_or("STRING")),
                    )
                })
                .collect()
        })
        .collect();

    Ok(rows)
}

/// Converts a JSON_ARRAY cell (always a string or null on the wire) into the
/// JSON type the column's manifest declares.
fn coerce(raw: Option<String>, type_name: &str) -> Value {
    let Some(text) = raw else {
        return Value::Null;
    };

    match type_name {
        "TINYINT" | "SMALLINT" | "INT" | "BIGINT" | "SHORT" | "LONG" => text
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or(Value::String(text)),
        "FLOAT" | "DOUBLE" | "DECIMAL" => text
            .parse::<f64>()
            .map(Value::from)
            .unwrap_or(Value::String(text)),
        "BOOLEAN" => text
            .parse::<bool>()
            .map(Value::Bool)
            .unwrap_or(Value::String(text)),
        _ => Value::String(text),
    }
}

/// Ensures the workspace host carries a scheme.
fn normalize_host(host: &str) -> String {
    let trimmed = host.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host_adds_scheme() {
        assert_eq!(
            normalize_host("dbc-abc123.cloud.databricks.com"),
            "https://dbc-abc123.cloud.databricks.com"
        );
    }

    #[test]
    fn test_normalize_host_keeps_scheme_and_trims_slash() {
        assert_eq!(
            normalize_host("https://dbc-abc123.cloud.databricks.com/"),
            "https://dbc-abc123.cloud.databricks.com"
        );
    }

    #[test]
    fn test_coerce_by_manifest_type() {
        assert_eq!(coerce(Some("42".to_string()), "INT"), json!(42));
        assert_eq!(coerce(Some("3.5".to_string()), "DOUBLE"), json!(3.5));
        assert_eq!(coerce(Some("true".to_string()), "BOOLEAN"), json!(true));
        assert_eq!(
            coerce(Some("Solar Panel".to_string()), "STRING"),
            json!("Solar Panel")
        );
        assert_eq!(coerce(None, "INT"), Value::Null);
    }

    #[test]
    fn test_coerce_unparseable_number_stays_text() {
        assert_eq!(coerce(Some("N/A".to_string()), "INT"), json!("N/A"));
    }

    fn statement(state: &str, error: Option<&str>) -> StatementResponse {
        StatementResponse {
            status: StatementStatus {
                state: state.to_string(),
                error: error.map(|m| StatementError {
                    message: Some(m.to_string()),
                }),
            },
            manifest: Some(Manifest {
                schema: Schema {
                    columns: vec![
                        Column {
                            name: "product_name".to_string(),
                            type_name: Some("STRING".to_string()),
                        },
                        Column {
                            name: "qty".to_string(),
                            type_name: Some("INT".to_string()),
                        },
                    ],
                },
            }),
            result: Some(ResultData {
                data_array: vec![
                    vec![Some("Solar Panel".to_string()), Some("40".to_string())],
                    vec![Some("Inverter".to_string()), None],
                ],
            }),
        }
    }

    #[test]
    fn test_rows_from_succeeded_statement() {
        let rows = rows_from_statement(statement("SUCCEEDED", None)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["product_name"], json!("Solar Panel"));
        assert_eq!(rows[0]["qty"], json!(40));
        assert_eq!(rows[1]["qty"], Value::Null);
    }

    #[test]
    fn test_failed_statement_surfaces_message() {
        let result = rows_from_statement(statement("FAILED", Some("TABLE_NOT_FOUND")));

        match result {
            Err(ApiError::DataSource(message)) => assert_eq!(message, "TABLE_NOT_FOUND"),
            other => panic!("expected DataSource error, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_statement_without_message_reports_state() {
        let result = rows_from_statement(statement("CANCELED", None));

        match result {
            Err(ApiError::DataSource(message)) => {
                assert!(message.contains("CANCELED"));
            }
            other => panic!("expected DataSource error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_any_request() {
        let client = DatabricksSqlClient::new(Arc::new(Config::default()));

        let result = client.execute("SELECT 1").await;
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
