//! Handler for the login/signup endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::login::LoginRequest;
use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Emails a login link to the given address.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request Body
///
/// ```json
/// { "email_address": "robin@example.com" }
/// ```
///
/// The backend receives `{ email_address, url }` where `url` is the profile
/// page prefix `<frontend>/user-profile/`. Any `url` the caller sends is ignored.
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Email sent successfully" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: `email_address` missing or empty, or body is not valid JSON.
///   The backend is not called.
/// - **500 Internal Server Error**: backend call failed.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    state
        .subscription_service
        .request_login(req.email_address)
        .await?;

    Ok(Json(MessageResponse::ok("Email sent successfully")))
}
