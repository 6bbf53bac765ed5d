//! Handler for the notification trigger endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::trigger::TriggerRequest;
use crate::domain::backend::NotificationTrigger;
use crate::error::AppError;
use crate::state::AppState;

/// Asks the backend to send the subscriber's notifications now.
///
/// # Endpoint
///
/// `POST /api/trigger`
///
/// # Request Body
///
/// ```json
/// { "secret": "f3b1c9" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: body is not a JSON object
/// - **500 Internal Server Error**: backend call failed
pub async fn trigger_handler(
    State(state): State<AppState>,
    payload: Result<Json<TriggerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(req) = payload?;

    state
        .subscription_service
        .trigger_notifications(NotificationTrigger::from(req))
        .await?;

    Ok(Json(MessageResponse::ok("Notifications triggered successfully")))
}
