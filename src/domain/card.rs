//! Card and shipment domain types.
//!
//! Raw card numbers only ever travel as bound values; the masked form is
//! the only representation written next to shipment data.

use std::fmt;
use std::num::ParseIntError;

/// Prefix of every masked card value.
pub const MASK_PREFIX: &str = "XXXX-XXXX-XXXX-";

/// Number of trailing card characters kept visible.
pub const VISIBLE_DIGITS: usize = 4;

/// Identifier of a shipment row.
///
/// Only constructed by parsing, so a value of this type is always a
/// valid base-10 integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipmentId(i64);

impl ShipmentId {
    /// Parse a textual shipment id.
    ///
    /// Accepts an optional leading sign followed by ASCII digits. Anything
    /// else, including whitespace or trailing SQL, is rejected.
    pub fn parse(raw: &str) -> Result<Self, ParseIntError> {
        raw.parse::<i64>().map(Self)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transient input of a card submission, as received from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSubmission {
    pub card_number: Option<String>,
    pub shipment_id: Option<String>,
}

impl CardSubmission {
    pub fn new(card_number: Option<String>, shipment_id: Option<String>) -> Self {
        Self {
            card_number,
            shipment_id,
        }
    }
}

/// A card record persisted in the card-data store.
#[derive(Clone, PartialEq, Eq)]
pub struct CardRecord {
    /// Raw card number, bound as a parameter.
    pub card_number: String,
    pub shipment_id: ShipmentId,
}

impl CardRecord {
    pub fn new(card_number: impl Into<String>, shipment_id: ShipmentId) -> Self {
        Self {
            card_number: card_number.into(),
            shipment_id,
        }
    }

    /// Display-safe form of this record's card number.
    pub fn masked(&self) -> MaskedCardValue {
        MaskedCardValue::from_card_number(&self.card_number)
    }
}

// Keeps raw card numbers out of `{:?}` output and therefore out of logs.
impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRecord")
            .field("card_number", &self.masked())
            .field("shipment_id", &self.shipment_id)
            .finish()
    }
}

/// Masked card number: `XXXX-XXXX-XXXX-` followed by the last four characters.
///
/// Inputs shorter than four characters keep all of their characters and are
/// left-padded with `X`, so `"12"` masks to `XXXX-XXXX-XXXX-XX12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskedCardValue(String);

impl MaskedCardValue {
    pub fn from_card_number(card_number: &str) -> Self {
        let total = card_number.chars().count();
        let visible: String = card_number
            .chars()
            .skip(total.saturating_sub(VISIBLE_DIGITS))
            .collect();
        let padding = "X".repeat(VISIBLE_DIGITS - visible.chars().count());

        Self(format!("{MASK_PREFIX}{padding}{visible}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MaskedCardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
