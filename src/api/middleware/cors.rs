//! CORS policy for browser calls from the frontend origin.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Allows the frontend origin to call the API with credentials.
///
/// # Policy
///
/// - **Origin**: `frontend_origin` only
/// - **Methods**: `GET`, `POST`
/// - **Headers**: `Content-Type`, `Authorization`
/// - **Credentials**: allowed
pub fn layer(frontend_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
