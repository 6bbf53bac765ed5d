//! API route configuration.
//!
//! Mounted under `/api` by [`crate::routes::app_router`], which also applies
//! the rate limiter to everything here.

use crate::api::handlers::{
    api_health_handler, api_not_found_handler, click_handler, get_user_handler, login_handler,
    trigger_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /health`     - JSON liveness probe
/// - `POST /login`      - Email a login link
/// - `POST /user`       - Save a subscriber profile
/// - `GET  /user/{id}`  - Fetch a subscriber profile
/// - `POST /trigger`    - Send notifications now
/// - `GET  /click`      - Track a click and redirect
///
/// Unknown paths, and known paths hit with another method, answer `404` with
/// a JSON error body.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api_health_handler).fallback(api_not_found_handler))
        .route("/login", post(login_handler).fallback(api_not_found_handler))
        .route("/user", post(update_user_handler).fallback(api_not_found_handler))
        .route("/user/{id}", get(get_user_handler).fallback(api_not_found_handler))
        .route("/trigger", post(trigger_handler).fallback(api_not_found_handler))
        .route("/click", get(click_handler).fallback(api_not_found_handler))
        .fallback(api_not_found_handler)
}
