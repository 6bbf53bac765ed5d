//! Handler for email click tracking.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::error;
use validator::Validate;

use crate::api::dto::click::{ClickParams, PARAMS_REQUIRED};
use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Records a click and redirects to its destination.
///
/// # Endpoint
///
/// `GET /api/click?tracking_id=<id>&destination=<url>`
///
/// # Request Flow
///
/// 1. Validate that both query parameters are present and non-empty
/// 2. Hand the click to the detached tracker (one retry on failure)
/// 3. Return `302 Found` to `destination` without waiting for tracking
///
/// # Errors
///
/// - **400 Bad Request**: a parameter is missing or empty; nothing is tracked
/// - **500 Internal Server Error**: `destination` cannot be sent as a `Location`
///   header; the click has still been tracked
pub async fn click_handler(
    State(state): State<AppState>,
    query: Result<Query<ClickParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) =
        query.map_err(|_| AppError::bad_request(PARAMS_REQUIRED, Value::Null))?;
    params.validate()?;

    let event = ClickEvent::from(params);
    let location = HeaderValue::from_str(&event.destination);

    state.click_tracker.spawn(event);

    let location = location.map_err(|e| {
        error!(error = %e, "Error processing click");
        AppError::internal("Internal server error", Value::Null)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
