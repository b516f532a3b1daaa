//! Outcome reported back to callers of the payment workflow.

use serde::Serialize;
use utoipa::ToSchema;

/// Message returned when either input is absent.
pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Both creditCard and shipmentId parameters are required";

/// Message returned when the shipment id is not an integer.
pub const INVALID_SHIPMENT_ID_MESSAGE: &str =
    "Invalid shipment ID format. Must be a valid number.";

/// Result of a single payment record submission.
///
/// Serializes as `{"success": true, "shipment_id": "..."}` or
/// `{"error": true, "message": "..."}`. Use the constructors; they keep the
/// flag fields `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum OperationResult {
    Success { success: bool, shipment_id: String },
    Error { error: bool, message: String },
}

impl OperationResult {
    /// Successful submission, echoing the shipment id as it was received.
    pub fn success(shipment_id: impl Into<String>) -> Self {
        OperationResult::Success {
            success: true,
            shipment_id: shipment_id.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        OperationResult::Error {
            error: true,
            message: message.into(),
        }
    }

    pub fn missing_parameters() -> Self {
        Self::error(MISSING_PARAMETERS_MESSAGE)
    }

    pub fn invalid_shipment_id() -> Self {
        Self::error(INVALID_SHIPMENT_ID_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            OperationResult::Success { .. } => None,
            OperationResult::Error { message, .. } => Some(message),
        }
    }
}
