//! Subscriber-facing operations proxied to the backend.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::domain::backend::{
    BackendClient, BackendError, LoginLink, NotificationTrigger, ProfileUpdate,
};
use crate::error::AppError;

/// Service for login links, profile edits and notification triggers.
///
/// Every operation is a single backend call. Backend failures are logged here
/// and converted to [`AppError::Internal`]; the one exception is a 404 on
/// profile lookup, which becomes [`AppError::NotFound`].
pub struct SubscriptionService {
    backend: Arc<dyn BackendClient>,
    profile_url: String,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    ///
    /// `frontend_base_url` is where the profile page is served; login emails
    /// link to `<frontend_base_url>/user-profile/`.
    pub fn new(backend: Arc<dyn BackendClient>, frontend_base_url: &str) -> Self {
        Self {
            backend,
            profile_url: format!("{}/user-profile/", frontend_base_url.trim_end_matches('/')),
        }
    }

    /// Link prefix embedded in login emails.
    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    /// Asks the backend to email a login link to `email_address`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend call fails.
    pub async fn request_login(&self, email_address: String) -> Result<(), AppError> {
        let link = LoginLink {
            email_address,
            url: self.profile_url.clone(),
        };
        let email = link.email_address.clone();

        self.backend
            .send_login_link(link)
            .await
            .map_err(|e| upstream_failure("Error during login", e))?;

        info!(email_address = %email, url = %self.profile_url, "Sent login email");
        Ok(())
    }

    /// Forwards a profile update as received.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend call fails.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<(), AppError> {
        self.backend
            .update_user(update)
            .await
            .map_err(|e| upstream_failure("Error updating user data", e))?;

        info!("User profile updated successfully");
        Ok(())
    }

    /// Fetches the profile identified by `id`, returning the backend JSON as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the backend answers 404.
    /// Returns [`AppError::Internal`] on any other backend failure.
    pub async fn get_profile(&self, id: &str) -> Result<Value, AppError> {
        match self.backend.get_user(id).await {
            Ok(profile) => {
                info!("Fetched user profile from backend");
                Ok(profile)
            }
            Err(BackendError::NotFound) => {
                info!("Login token not found");
                Err(AppError::not_found("Login token not found", Value::Null))
            }
            Err(e) => {
                error!(error = %e, "Error fetching login token");
                Err(AppError::internal("Error fetching login token", Value::Null))
            }
        }
    }

    /// Asks the backend to send notifications now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend call fails.
    pub async fn trigger_notifications(
        &self,
        trigger: NotificationTrigger,
    ) -> Result<(), AppError> {
        self.backend
            .trigger_notifications(trigger)
            .await
            .map_err(|e| upstream_failure("Error triggering notifications", e))?;

        info!("Notifications triggered successfully");
        Ok(())
    }
}

/// Logs a failed backend call and hides its details from the caller.
fn upstream_failure(context: &str, err: BackendError) -> AppError {
    error!(error = %err, "{}", context);
    AppError::internal("Internal server error", Value::Null)
}
