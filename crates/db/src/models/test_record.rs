//! Rows of the externally owned `"Test"` table used by the connectivity
//! probe routes.

use fitness_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::query::{DbError, Row};

/// A row from `"Test"`. Column names are PascalCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl TestRecord {
    /// Map a materialized row onto the record shape.
    pub fn from_row(row: Row) -> Result<Self, DbError> {
        Ok(serde_json::from_value(serde_json::Value::Object(row))?)
    }
}

/// Input for inserting a `"Test"` row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTestRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
