//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`            - Liveness probe (plain text `OK`)
//! - `/api/*`                  - JSON gateway to the backend (rate limited)
//! - `GET  /`                  - Login/signup page
//! - `GET  /user-profile/{id}` - Profile edit page
//! - `/static/*`               - Static assets, cached for a year
//! - anything else             - Login page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - nosniff, frame options, HSTS and friends
//! - **CORS** - Frontend origin only, GET/POST, credentials allowed
//! - **Compression** - gzip
//! - **Rate limiting** - Per-IP token bucket on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, rate_limit, security_headers};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::login_handler;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tower::{Layer, ServiceBuilder};
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings or the frontend origin from
/// `config` cannot be turned into middleware.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let api_router = api::routes::routes().layer(rate_limit::layer(
        config.rate_limit_burst,
        config.rate_limit_window(),
    )?);

    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(&config.static_dir));

    let origin = config.frontend_origin()?;
    let origin = HeaderValue::from_str(&origin)
        .with_context(|| format!("Frontend origin '{origin}' is not a valid header value"))?;

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .nest_service("/static", static_files)
        .fallback(login_handler)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors::layer(origin));

    let router = security_headers::apply(router).layer(api::middleware::tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
