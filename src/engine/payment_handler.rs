//! Payment Record Handler - validates a card submission and records it.
//!
//! Workflow, in order:
//! 1. Presence check of both inputs
//! 2. Integer parse of the shipment id
//! 3. Idempotent creation of the card table
//! 4. Parameterized insert of the card record
//! 5. Parameterized update of the shipment's masked card field
//!
//! Validation failures short-circuit before any store is touched. The two
//! writes go to different stores and are not atomic: if the shipment update
//! fails, the card record from step 4 remains.

use std::sync::Arc;

use crate::domain::{CardRecord, CardSubmission, OperationResult, ShipmentId};
use crate::error::StorageResult;
use crate::storage::statements::{
    CREATE_CREDIT_CARD_TABLE, INSERT_CREDIT_CARD, UPDATE_SHIPMENT_CARD,
};
use crate::storage::{CardDataStore, OperationsStore, SqlValue};

/// Records card submissions against shipments.
pub struct PaymentRecordHandler {
    card_store: Arc<dyn CardDataStore>,
    operations_store: Arc<dyn OperationsStore>,
}

impl PaymentRecordHandler {
    /// Create a new handler over the two store handles.
    pub fn new(
        card_store: Arc<dyn CardDataStore>,
        operations_store: Arc<dyn OperationsStore>,
    ) -> Self {
        Self {
            card_store,
            operations_store,
        }
    }

    /// Handle a submission received from the API layer.
    pub async fn handle_submission(
        &self,
        submission: &CardSubmission,
    ) -> StorageResult<OperationResult> {
        self.handle(
            submission.card_number.as_deref(),
            submission.shipment_id.as_deref(),
        )
        .await
    }

    /// Validate the inputs and record the card against the shipment.
    ///
    /// Returns `Ok` with an error result for invalid input, and `Err` only
    /// when a store fails.
    pub async fn handle(
        &self,
        card_number: Option<&str>,
        shipment_id: Option<&str>,
    ) -> StorageResult<OperationResult> {
        let (Some(card_number), Some(raw_shipment_id)) = (card_number, shipment_id) else {
            tracing::info!("Rejected submission with missing parameters");
            return Ok(OperationResult::missing_parameters());
        };

        let shipment_id = match ShipmentId::parse(raw_shipment_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected submission with invalid shipment id");
                return Ok(OperationResult::invalid_shipment_id());
            }
        };

        let record = CardRecord::new(card_number, shipment_id);
        self.record_card(&record).await?;

        tracing::info!(
            shipment_id = %shipment_id,
            masked_card = %record.masked(),
            "Payment record stored"
        );

        Ok(OperationResult::success(raw_shipment_id))
    }

    /// Phase one writes the card record, phase two the shipment's masked card.
    async fn record_card(&self, record: &CardRecord) -> StorageResult<()> {
        self.card_store.execute(CREATE_CREDIT_CARD_TABLE).await?;

        self.card_store
            .update(
                INSERT_CREDIT_CARD,
                &[
                    SqlValue::from(record.card_number.as_str()),
                    SqlValue::from(record.shipment_id),
                ],
            )
            .await?;

        let updated = self
            .operations_store
            .update(
                UPDATE_SHIPMENT_CARD,
                &[
                    SqlValue::from(record.masked()),
                    SqlValue::from(record.shipment_id),
                ],
            )
            .await
            .inspect_err(|e| {
                tracing::error!(
                    shipment_id = %record.shipment_id,
                    error = %e,
                    "Card record stored but shipment update failed"
                );
            })?;

        if updated == 0 {
            tracing::warn!(
                shipment_id = %record.shipment_id,
                "No shipment row matched the card update"
            );
        }

        Ok(())
    }
}
