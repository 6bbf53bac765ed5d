//! DTOs for the login/signup endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to email a login link.
///
/// A missing `email_address` deserializes to an empty string so it fails
/// validation the same way an explicit `""` does. Non-string values are
/// rejected at deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email address is required"))]
    pub email_address: String,
}
