//! Store handle traits.
//!
//! The payment workflow talks to two independent handles: one scoped to
//! card data and one scoped to general operations data. Each capability
//! set is kept as small as the workflow needs.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::storage::SqlValue;

/// Handle to the card-data store.
#[async_trait]
pub trait CardDataStore: Send + Sync {
    /// Run a schema statement that carries no external values.
    async fn execute(&self, ddl: &str) -> StorageResult<()>;

    /// Run a parameterized write, returning the number of affected rows.
    async fn update(&self, sql: &str, params: &[SqlValue]) -> StorageResult<u64>;
}

/// Handle to the general operations store.
#[async_trait]
pub trait OperationsStore: Send + Sync {
    /// Run a parameterized write, returning the number of affected rows.
    async fn update(&self, sql: &str, params: &[SqlValue]) -> StorageResult<u64>;
}
