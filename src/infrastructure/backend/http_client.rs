//! HTTP implementation of [`BackendClient`] using a pooled `reqwest` client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::backend::{
    BackendClient, BackendError, LoginLink, NotificationTrigger, ProfileUpdate,
};
use crate::domain::click_event::ClickEvent;

/// Backend client speaking JSON over HTTP.
///
/// One `reqwest::Client` is shared by every request so keep-alive connections
/// to the backend are reused. Every request is bounded by the configured timeout.
#[derive(Clone)]
pub struct HttpBackendClient {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpBackendClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidUrl`] if `base_url` is not an absolute
    /// URL that can carry a path, and [`BackendError::Network`] if the
    /// underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| BackendError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

/// Transport failures become `Network`; body read/decode failures become `Decode`.
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// Turns a non-2xx response into the matching [`BackendError`].
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(BackendError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn send_login_link(&self, link: LoginLink) -> Result<(), BackendError> {
        let url = self.endpoint(&["login"])?;
        debug!(%url, "POST login");

        let response = self.client.post(url).json(&link).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update_user(&self, update: ProfileUpdate) -> Result<(), BackendError> {
        let url = self.endpoint(&["user"])?;
        debug!(%url, "POST user");

        let response = self.client.post(url).json(&update).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Value, BackendError> {
        let url = self.endpoint(&["user", id])?;
        debug!(%url, "GET user");

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn trigger_notifications(
        &self,
        trigger: NotificationTrigger,
    ) -> Result<(), BackendError> {
        let url = self.endpoint(&["trigger"])?;
        debug!(%url, "POST trigger");

        let response = self.client.post(url).json(&trigger).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn track_click(&self, event: &ClickEvent) -> Result<(), BackendError> {
        let url = self.endpoint(&["click"])?;
        debug!(%url, tracking_id = %event.tracking_id, "GET click");

        let response = self
            .client
            .get(url)
            .query(&event.query_pairs())
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
