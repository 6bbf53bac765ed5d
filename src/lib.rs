//! # Hawthorne Wish List Gateway
//!
//! Web front end and API gateway for the Hawthorne Wish List subscription
//! service, built with Axum.
//!
//! ## Architecture
//!
//! The gateway owns no data. Each request is validated, forwarded to the
//! backend service of record, and the backend outcome is mapped back to HTTP:
//!
//! - **Domain Layer** ([`domain`]) - Backend contract and click tracking
//! - **Application Layer** ([`application`]) - Subscription operations and error mapping
//! - **Infrastructure Layer** ([`infrastructure`]) - Pooled HTTP client for the backend
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Login and profile pages
//!
//! ## Features
//!
//! - Login/signup by emailed link
//! - Profile fetch and update, notification trigger
//! - Fire-and-forget click tracking with a single retry, always redirecting
//! - Rate limiting, CORS, security headers, compression, and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_BASE_URL="http://localhost:8080"
//! export FRONTEND_BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SubscriptionService;
    pub use crate::domain::backend::{BackendClient, BackendError};
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::click_tracker::ClickTracker;
    pub use crate::error::AppError;
    pub use crate::infrastructure::backend::HttpBackendClient;
    pub use crate::state::AppState;
}
