//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CardSubmission;

// ==================== Payments ====================

/// Query parameters of a payment record submission.
///
/// Built from the raw query pairs; when a key repeats, its first value wins.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PaymentParams {
    /// Raw card number.
    #[serde(default, rename = "creditCard")]
    pub credit_card: Option<String>,
    /// Shipment id, must be an integer.
    #[serde(default, rename = "shipmentId")]
    pub shipment_id: Option<String>,
}

impl FromIterator<(String, String)> for PaymentParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "creditCard" => &mut params.credit_card,
                "shipmentId" => &mut params.shipment_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl From<PaymentParams> for CardSubmission {
    fn from(params: PaymentParams) -> Self {
        CardSubmission::new(params.credit_card, params.shipment_id)
    }
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Card-data store connectivity.
    pub card_data_store: String,
    /// Operations store connectivity.
    pub operations_store: String,
    /// Timestamp.
    pub timestamp: String,
}
