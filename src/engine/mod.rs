//! Payment workflow for Cargo Payments.
//!
//! The handler validates a card submission, stores the card record in the
//! card-data store and writes the masked card onto the shipment.

mod payment_handler;

pub use payment_handler::*;
