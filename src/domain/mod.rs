//! Domain types for Cargo Payments.
//!
//! This module contains the card, shipment and result value objects.

mod card;
mod result;

pub use card::*;
pub use result::*;
