//! DTOs for click tracking.

use serde::Deserialize;
use validator::Validate;

use crate::domain::click_event::ClickEvent;

/// Message returned when either parameter is missing or empty.
pub const PARAMS_REQUIRED: &str = "tracking_id and destination are required";

/// Query parameters of `GET /api/click`.
#[derive(Debug, Deserialize, Validate)]
pub struct ClickParams {
    #[serde(default)]
    #[validate(length(min = 1, message = "tracking_id and destination are required"))]
    pub tracking_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "tracking_id and destination are required"))]
    pub destination: String,
}

impl From<ClickParams> for ClickEvent {
    fn from(params: ClickParams) -> Self {
        ClickEvent::new(params.tracking_id, params.destination)
    }
}
