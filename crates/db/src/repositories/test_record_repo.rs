//! Repository for the `"Test"` table.

use crate::config::DatabaseConfig;
use crate::models::test_record::{CreateTestRecord, TestRecord};
use crate::query::{execute_query, DbError, QueryParam};

/// Provides list and insert for `"Test"` rows.
pub struct TestRecordRepo;

impl TestRecordRepo {
    /// List every row, ordered by id.
    pub async fn list(config: &DatabaseConfig) -> Result<Vec<TestRecord>, DbError> {
        let rows = execute_query(
            config,
            r#"SELECT "Id", "Name", "Description", "CreatedAt" FROM "Test" ORDER BY "Id""#,
            &[],
        )
        .await?;
        rows.into_iter().map(TestRecord::from_row).collect()
    }

    /// Insert one row. The table assigns `Id` and `CreatedAt`.
    pub async fn create(config: &DatabaseConfig, input: &CreateTestRecord) -> Result<(), DbError> {
        execute_query(
            config,
            r#"INSERT INTO "Test" ("Name", "Description") VALUES ($1, $2)"#,
            &[
                QueryParam::Text(Some(input.name.clone())),
                QueryParam::Text(input.description.clone()),
            ],
        )
        .await?;
        Ok(())
    }
}
