//! Profile edit page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};

/// Template for the profile edit page.
///
/// The page script loads `/api/user/{id}` into the form and saves through
/// `POST /api/user` with `id` as the secret.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub id: String,
}

/// Renders the profile page for the subscriber behind `id`.
///
/// # Endpoint
///
/// `GET /user-profile/{id}`
///
/// `id` is the opaque secret from the login email. It is not checked here;
/// an unknown id shows up as a load error on the page.
pub async fn profile_handler(Path(id): Path<String>) -> impl IntoResponse {
    ProfileTemplate { id }
}
