//! SQLite-backed store handle.

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqlitePoolOptions};

use crate::error::{StorageError, StorageResult};
use crate::storage::statements::CREATE_SHIPMENT_TABLE;
use crate::storage::{CardDataStore, OperationsStore, SqlValue, StoreScope};

/// Store handle over a SQLite connection pool.
///
/// The same type serves both logical stores; the scope only tags errors
/// and log lines with the store that produced them.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    scope: StoreScope,
}

impl SqliteStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: SqlitePool, scope: StoreScope) -> Self {
        Self { pool, scope }
    }

    /// Open a pool for the given database URL.
    pub async fn connect(url: &str, max_connections: u32, scope: StoreScope) -> StorageResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| StorageError::new(scope, e))?;

        Ok(Self::new(pool, scope))
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool())
            .await
            .map_err(|e| StorageError::new(self.scope, e))?;
        Ok(())
    }

    /// Create the shipment table when running without the operations service.
    pub async fn ensure_shipment_schema(&self) -> StorageResult<()> {
        sqlx::query(CREATE_SHIPMENT_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::new(self.scope, e))?;
        Ok(())
    }

    async fn run_update(&self, sql: &str, params: &[SqlValue]) -> StorageResult<u64> {
        let result = bind_all(sql, params)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::new(self.scope, e))?;

        tracing::debug!(
            scope = %self.scope,
            params = params.len(),
            rows_affected = result.rows_affected(),
            "Statement executed"
        );

        Ok(result.rows_affected())
    }
}

/// Bind each value to its positional placeholder.
fn bind_all<'q>(sql: &'q str, params: &'q [SqlValue]) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    params
        .iter()
        .fold(sqlx::query(sql), |query, param| match param {
            SqlValue::Text(text) => query.bind(text.as_str()),
            SqlValue::Integer(n) => query.bind(*n),
        })
}

#[async_trait]
impl CardDataStore for SqliteStore {
    async fn execute(&self, ddl: &str) -> StorageResult<()> {
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::new(self.scope, e))?;
        Ok(())
    }

    async fn update(&self, sql: &str, params: &[SqlValue]) -> StorageResult<u64> {
        self.run_update(sql, params).await
    }
}

#[async_trait]
impl OperationsStore for SqliteStore {
    async fn update(&self, sql: &str, params: &[SqlValue]) -> StorageResult<u64> {
        self.run_update(sql, params).await
    }
}
