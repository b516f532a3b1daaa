//! Storage value types shared by the store handles.

use std::fmt;

use crate::domain::{MaskedCardValue, ShipmentId};

/// A positional value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<ShipmentId> for SqlValue {
    fn from(value: ShipmentId) -> Self {
        SqlValue::Integer(value.value())
    }
}

impl From<MaskedCardValue> for SqlValue {
    fn from(value: MaskedCardValue) -> Self {
        SqlValue::Text(value.into_inner())
    }
}

/// Which logical store a handle talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreScope {
    /// Sensitive card records.
    CardData,
    /// General operations data such as shipments.
    Operations,
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreScope::CardData => write!(f, "card_data"),
            StoreScope::Operations => write!(f, "operations"),
        }
    }
}
