//! Single-statement data-access helper.
//!
//! [`execute_query`] opens one connection, runs one statement with
//! positional parameters, materializes every row as a column-name → value
//! map and closes the connection again. There is no pool and no retry.

use std::time::Duration;

use fitness_core::types::{DbId, Timestamp};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, ConnectOptions, Connection, PgConnection, Row as _, TypeInfo};

use crate::config::{DatabaseConfig, CONNECT_TIMEOUT_SECS};

/// One materialized result row, keyed by column name.
pub type Row = Map<String, Value>;

/// Errors from [`execute_query`].
///
/// Configuration problems, connection problems and statement failures are
/// kept apart so callers can answer each with a different status.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Missing database configuration: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Database connection timed out after {0} seconds")]
    ConnectTimeout(u64),

    #[error("Database query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Unsupported column type {type_name} for column {column}")]
    UnsupportedType { column: String, type_name: String },

    #[error("Unexpected row shape: {0}")]
    RowShape(#[from] serde_json::Error),
}

/// A positional statement parameter, bound as `$1`, `$2`, ... in order.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(Option<String>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Uuid(DbId),
    Timestamp(Timestamp),
}

/// Run one statement against a fresh connection and return all rows.
pub async fn execute_query(
    config: &DatabaseConfig,
    sql: &str,
    params: &[QueryParam],
) -> Result<Vec<Row>, DbError> {
    let missing = config.missing_keys();
    if !missing.is_empty() {
        return Err(DbError::MissingConfig(missing));
    }

    tracing::debug!(database = %config.redacted_url(), "Opening database connection");
    let mut conn = connect(config).await?;

    let mut query = sqlx::query(sql);
    for param in params {
        query = match param {
            QueryParam::Text(v) => query.bind(v.clone()),
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
            QueryParam::Bool(v) => query.bind(*v),
            QueryParam::Uuid(v) => query.bind(*v),
            QueryParam::Timestamp(v) => query.bind(*v),
        };
    }

    let result = query.fetch_all(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection");
    }

    let rows = result.map_err(DbError::Query)?;
    tracing::debug!(row_count = rows.len(), "Query executed");

    rows.iter().map(materialize).collect()
}

async fn connect(config: &DatabaseConfig) -> Result<PgConnection, DbError> {
    let options = config.connect_options();
    match tokio::time::timeout(
        Duration::from_secs(CONNECT_TIMEOUT_SECS),
        options.connect(),
    )
    .await
    {
        Ok(Ok(conn)) => Ok(conn),
        Ok(Err(e)) => Err(DbError::Connect(e)),
        Err(_) => Err(DbError::ConnectTimeout(CONNECT_TIMEOUT_SECS)),
    }
}

/// Turn one row into a column-name → JSON value map.
fn materialize(row: &PgRow) -> Result<Row, DbError> {
    let mut out = Map::with_capacity(row.columns().len());
    for column in row.columns() {
        let name = column.name();
        let type_name = column.type_info().name();
        let value = column_value(row, column.ordinal(), type_name)
            .map_err(DbError::Query)?
            .ok_or_else(|| DbError::UnsupportedType {
                column: name.to_string(),
                type_name: type_name.to_string(),
            })?;
        out.insert(name.to_string(), value);
    }
    Ok(out)
}

/// Decode one column by its PostgreSQL type name.
///
/// `Ok(None)` means the type is not supported; SQL `NULL` is `Value::Null`.
/// Timestamps without a zone are read as UTC.
fn column_value(row: &PgRow, index: usize, type_name: &str) -> Result<Option<Value>, sqlx::Error> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(Value::Bool),
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)?
            .map(|v| Value::from(f64::from(v))),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(index)?.map(Value::String)
        }
        "UUID" => row
            .try_get::<Option<DbId>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<Timestamp>, _>(index)?
            .map(|v| Value::String(v.to_rfc3339())),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)?
            .map(|v| Value::String(v.and_utc().to_rfc3339())),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(index)?,
        _ => return Ok(None),
    };
    Ok(Some(value.unwrap_or(Value::Null)))
}
