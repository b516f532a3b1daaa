//! Storage layer for Cargo Payments.
//!
//! Provides database access via SQLx with SQLite. Card data and shipment
//! data are reached through separate handles.

mod handle;
mod models;
mod repository;
pub mod statements;

pub use handle::{CardDataStore, OperationsStore};
pub use models::{SqlValue, StoreScope};
pub use repository::SqliteStore;
