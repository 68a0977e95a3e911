//! The `(sex, lastname)` performance index.

use crate::error::StoreError;
use crate::schema::{generate_create_performance_index, PERFORMANCE_INDEX_NAME, USERS_TABLE};
use tokio_postgres::Client;
use tracing::{debug, info};

/// Create the performance index unless it already exists.
pub async fn create_performance_index(client: &Client) -> Result<(), StoreError> {
    let sql = generate_create_performance_index();
    info!("Ensuring index: {}", PERFORMANCE_INDEX_NAME);
    debug!("DDL: {}", sql);
    client.execute(&sql, &[]).await?;
    Ok(())
}

/// Number of indexes named [`PERFORMANCE_INDEX_NAME`] on the users table of
/// the current schema.
pub async fn count_performance_indexes(client: &Client) -> Result<u64, StoreError> {
    let row = client
        .query_one(
            "SELECT COUNT(*) FROM pg_indexes \
             WHERE schemaname = current_schema() AND tablename = $1 AND indexname = $2",
            &[&USERS_TABLE, &PERFORMANCE_INDEX_NAME],
        )
        .await?;
    let count: i64 = row.try_get(0)?;
    Ok(count as u64)
}
