//! Handlers for subscriber profile endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::user::UpdateUserRequest;
use crate::domain::backend::ProfileUpdate;
use crate::error::AppError;
use crate::state::AppState;

/// Saves a subscriber profile.
///
/// # Endpoint
///
/// `POST /api/user`
///
/// # Request Body
///
/// ```json
/// {
///   "secret": "f3b1c9",
///   "user": {
///     "preferred_name": "Robin",
///     "email_address": "robin@example.com",
///     "favorite_keywords": ["lego", "tea"],
///     "favorites_only": false,
///     "unsubscribe": false
///   }
/// }
/// ```
///
/// `secret` and `user` are forwarded to the backend unchanged, including
/// explicit `null`s. Absent fields stay absent.
///
/// # Errors
///
/// - **400 Bad Request**: body is not a JSON object
/// - **500 Internal Server Error**: backend call failed
pub async fn update_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(req) = payload?;

    state
        .subscription_service
        .update_profile(ProfileUpdate::from(req))
        .await?;

    Ok(Json(MessageResponse::ok("User profile updated successfully")))
}

/// Fetches a subscriber profile by the secret id from the profile link.
///
/// # Endpoint
///
/// `GET /api/user/{id}`
///
/// # Response
///
/// The backend's JSON body, unchanged.
///
/// # Errors
///
/// - **404 Not Found**: backend does not know the id
/// - **500 Internal Server Error**: any other backend failure
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let profile = state.subscription_service.get_profile(&id).await?;
    Ok(Json(profile))
}
