//! HTTP request handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::api::types::*;
use crate::domain::{CardSubmission, OperationResult};
use crate::error::AppResult;
use crate::storage::SqliteStore;
use crate::AppState;

/// Record a card against a shipment.
///
/// GET|POST /v1/payments?creditCard=...&shipmentId=...
///
/// Answers with a one-element list holding the operation result. Invalid
/// input, including an unreadable query string, is reported inside that
/// result with status 200.
#[utoipa::path(
    post,
    path = "/v1/payments",
    params(
        ("creditCard" = Option<String>, Query, description = "Raw card number"),
        ("shipmentId" = Option<String>, Query, description = "Integer shipment id")
    ),
    responses(
        (status = 200, description = "Submission processed", body = Vec<OperationResult>),
        (status = 500, description = "Storage error")
    ),
    tag = "payments"
)]
pub async fn submit_payment(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<OperationResult>>> {
    let params: PaymentParams = match query {
        Ok(Query(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            tracing::warn!(status = %rejection.status(), "Unreadable payment query string");
            PaymentParams::default()
        }
    };
    let submission = CardSubmission::from(params);
    let result = state.handler.handle_submission(&submission).await?;

    tracing::debug!(
        success = result.is_success(),
        reason = ?result.message(),
        "Payment submission handled"
    );

    Ok(Json(vec![result]))
}

/// Health check endpoint.
///
/// GET /v1/health
#[utoipa::path(
    get,
    path = "/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let card_data_store = store_status(&state.card_store).await;
    let operations_store = store_status(&state.operations_store).await;

    let status = if card_data_store == "connected" && operations_store == "connected" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        card_data_store,
        operations_store,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn store_status(store: &SqliteStore) -> String {
    match store.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::build_router;
    use crate::engine::PaymentRecordHandler;
    use crate::logging::capture;
    use crate::storage::{SqliteStore, StoreScope};
    use crate::AppState;

    async fn test_state() -> AppState {
        let card_store = SqliteStore::connect("sqlite::memory:", 1, StoreScope::CardData)
            .await
            .unwrap();
        let operations_store = SqliteStore::connect("sqlite::memory:", 1, StoreScope::Operations)
            .await
            .unwrap();
        operations_store.ensure_shipment_schema().await.unwrap();
        sqlx::query("INSERT INTO shipment (id) VALUES (123)")
            .execute(operations_store.pool())
            .await
            .unwrap();

        AppState {
            handler: Arc::new(PaymentRecordHandler::new(
                Arc::new(card_store.clone()),
                Arc::new(operations_store.clone()),
            )),
            card_store,
            operations_store,
        }
    }

    async fn send(state: AppState, method: Method, uri: &str) -> (StatusCode, Value) {
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn shipment_card(state: &AppState, id: i64) -> Option<String> {
        let row: (Option<String>,) = sqlx::query_as("SELECT credit_card FROM shipment WHERE id = ?")
            .bind(id)
            .fetch_one(state.operations_store.pool())
            .await
            .unwrap();
        row.0
    }

    #[tokio::test]
    async fn test_submit_payment_success() {
        let state = test_state().await;

        let (status, body) = send(
            state.clone(),
            Method::POST,
            "/v1/payments?creditCard=4111111111111111&shipmentId=123",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"success": true, "shipment_id": "123"}]));
        assert_eq!(
            shipment_card(&state, 123).await.as_deref(),
            Some("XXXX-XXXX-XXXX-1111")
        );

        let stored: (String, i64) =
            sqlx::query_as("SELECT card_number, shipment_id FROM credit_card")
                .fetch_one(state.card_store.pool())
                .await
                .unwrap();
        assert_eq!(stored, ("4111111111111111".to_string(), 123));
    }

    #[tokio::test]
    async fn test_card_injection_is_stored_as_data() {
        let state = test_state().await;

        let (status, body) = send(
            state.clone(),
            Method::GET,
            "/v1/payments?creditCard=%27%3B%20DROP%20TABLE%20credit_card%3B%20--&shipmentId=123",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["success"], json!(true));

        let stored: (String,) = sqlx::query_as("SELECT card_number FROM credit_card")
            .fetch_one(state.card_store.pool())
            .await
            .unwrap();
        assert_eq!(stored.0, "'; DROP TABLE credit_card; --");
    }

    #[tokio::test]
    async fn test_shipment_injection_is_rejected() {
        let state = test_state().await;

        let (status, body) = send(
            state.clone(),
            Method::POST,
            "/v1/payments?creditCard=4111111111111111&shipmentId=1%3B%20DROP%20TABLE%20shipment%3B%20--",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "error": true,
                "message": "Invalid shipment ID format. Must be a valid number."
            }])
        );
        assert_eq!(shipment_card(&state, 123).await, None);
    }

    #[tokio::test]
    async fn test_missing_parameters() {
        let state = test_state().await;

        let (_, body) = send(state.clone(), Method::POST, "/v1/payments?shipmentId=123").await;
        assert_eq!(body[0]["error"], json!(true));
        assert_eq!(
            body[0]["message"],
            json!("Both creditCard and shipmentId parameters are required")
        );

        let (_, body) = send(state, Method::POST, "/v1/payments").await;
        assert_eq!(body[0]["error"], json!(true));
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() {
        let state = test_state().await;
        sqlx::query("DROP TABLE shipment")
            .execute(state.operations_store.pool())
            .await
            .unwrap();

        let (status, body) = send(
            state,
            Method::POST,
            "/v1/payments?creditCard=4111111111111111&shipmentId=123",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], json!("STORAGE_ERROR"));
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_repeated_parameters_use_first_value() {
        let state = test_state().await;

        let (status, body) = send(
            state.clone(),
            Method::POST,
            "/v1/payments?creditCard=4111111111111111&creditCard=5555&shipmentId=123&shipmentId=9",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"success": true, "shipment_id": "123"}]));

        let stored: (String, i64) =
            sqlx::query_as("SELECT card_number, shipment_id FROM credit_card")
                .fetch_one(state.card_store.pool())
                .await
                .unwrap();
        assert_eq!(stored, ("4111111111111111".to_string(), 123));
    }

    #[tokio::test]
    async fn test_raw_card_number_is_not_logged() {
        let state = test_state().await;
        let (logs, _guard) = capture::start("cargo_payments=debug,tower_http=debug");

        let (status, _) = send(
            state,
            Method::POST,
            "/v1/payments?creditCard=4111111111111111&shipmentId=123",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let output = logs.contents();
        assert!(output.contains("Payment record stored"));
        assert!(output.contains("path=/v1/payments"));
        assert!(output.contains("XXXX-XXXX-XXXX-1111"));
        assert!(!output.contains("4111111111111111"));
        assert!(!output.contains("creditCard"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = test_state().await;

        let (status, body) = send(state, Method::GET, "/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["card_data_store"], json!("connected"));
        assert_eq!(body["operations_store"], json!("connected"));
    }
}
