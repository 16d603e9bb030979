use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::referral::dto::SymptomRequest;
use crate::features::referral::service::EMPTY_DESCRIPTION_DETAIL;
use crate::server::AppState;

pub async fn handle_predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    // A missing `description` field behaves like an empty one, so the payload
    // is decoded here instead of through the extractor.
    match serde_json::from_value::<SymptomRequest>(payload) {
        Ok(request) => match state.service.predict(request).await {
            Ok(response) => Json(json!(response)).into_response(),
            Err(error) => error.into_response(),
        },
        Err(_) => AppError::invalid_input(EMPTY_DESCRIPTION_DETAIL).into_response(),
    }
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}
