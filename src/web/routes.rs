//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_handler, profile_handler};
use axum::{Router, routing::get};

/// Browser pages.
///
/// # Endpoints
///
/// - `GET /`                  - Login/signup page
/// - `GET /user-profile/{id}` - Profile edit page for the subscriber behind `id`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_handler))
        .route("/user-profile/{id}", get(profile_handler))
}
