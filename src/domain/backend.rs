//! Contract for the external backend that owns subscribers and email dispatch.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::click_event::ClickEvent;

/// Failures talking to the backend.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Backend answered 404.
    #[error("Resource not found on backend")]
    NotFound,

    /// Backend answered with any other non-2xx status.
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, timeout, or other transport failure.
    #[error("Backend request failed: {0}")]
    Network(String),

    /// Backend answered 2xx with a body that is not the expected JSON.
    #[error("Invalid backend response body: {0}")]
    Decode(String),

    /// Endpoint URL could not be built from the configured base URL.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

/// Body of `POST /login`: who to email and the profile link prefix to embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginLink {
    pub email_address: String,
    pub url: String,
}

/// Body of `POST /user`, forwarded exactly as the caller sent it.
///
/// Absent fields stay absent on the wire; `Some(Value::Null)` is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
}

/// Body of `POST /trigger`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<Value>,
}

/// Backend operations the gateway proxies to.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpBackendClient`] - pooled HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Asks the backend to email a login link (`POST /login`).
    async fn send_login_link(&self, link: LoginLink) -> Result<(), BackendError>;

    /// Saves a subscriber profile (`POST /user`).
    async fn update_user(&self, update: ProfileUpdate) -> Result<(), BackendError>;

    /// Fetches a subscriber profile by its secret id (`GET /user/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] when the backend does not know the id.
    async fn get_user(&self, id: &str) -> Result<Value, BackendError>;

    /// Triggers notification emails for a subscriber (`POST /trigger`).
    async fn trigger_notifications(&self, trigger: NotificationTrigger)
    -> Result<(), BackendError>;

    /// Records a click (`GET /click?tracking_id&destination`).
    async fn track_click(&self, event: &ClickEvent) -> Result<(), BackendError>;
}
