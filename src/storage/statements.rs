//! Fixed SQL statement text.
//!
//! Every statement carrying external data uses `?` placeholders; values are
//! only ever supplied as bound parameters.

/// Idempotent creation of the card records table. Carries no external values.
pub const CREATE_CREDIT_CARD_TABLE: &str = "CREATE TABLE IF NOT EXISTS credit_card (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    card_number TEXT NOT NULL, \
    shipment_id INTEGER NOT NULL)";

/// Insert of a card record. Binds `(card_number, shipment_id)`.
pub const INSERT_CREDIT_CARD: &str =
    "INSERT INTO credit_card (card_number, shipment_id) VALUES (?, ?)";

/// Update of a shipment's card field. Binds `(masked_card, shipment_id)`.
pub const UPDATE_SHIPMENT_CARD: &str = "UPDATE shipment SET credit_card = ? WHERE id = ?";

/// Local bootstrap of the shipment table, which is owned by the operations
/// service in deployed environments.
pub const CREATE_SHIPMENT_TABLE: &str = "CREATE TABLE IF NOT EXISTS shipment (\
    id INTEGER PRIMARY KEY, \
    credit_card TEXT)";
