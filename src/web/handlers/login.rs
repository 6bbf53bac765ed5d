//! Login/signup page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login/signup page.
///
/// Renders `templates/login.html`: a single email field posting to
/// `/api/login`, replaced by a "check your email" notice on success.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /`, and any non-API path no other route matches.
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {}
}
