//! DTOs for the notification trigger endpoint.

use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;

use crate::api::dto::user::as_sent;
use crate::domain::backend::NotificationTrigger;

/// `{ secret }` identifying whose notifications to send.
///
/// An explicit `null` is forwarded as `null`; an absent `secret` stays absent.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct TriggerRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub secret: Option<Option<Value>>,
}

impl From<TriggerRequest> for NotificationTrigger {
    fn from(req: TriggerRequest) -> Self {
        NotificationTrigger {
            secret: as_sent(req.secret),
        }
    }
}
