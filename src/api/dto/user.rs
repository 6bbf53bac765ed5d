//! DTOs for profile endpoints.

use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;

use crate::domain::backend::ProfileUpdate;

/// Profile update as sent by the profile page: `{ secret, user }`.
///
/// Both fields are forwarded untouched, so they stay untyped JSON.
///
/// # Field semantics
///
/// - **Absent** → left out of the backend request
/// - **`null`** → forwarded as `null`
/// - **Value** → forwarded as-is
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub secret: Option<Option<Value>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub user: Option<Option<Value>>,
}

/// Collapses "present but null" into `Value::Null`, keeping absence as `None`.
pub(crate) fn as_sent(field: Option<Option<Value>>) -> Option<Value> {
    field.map(|value| value.unwrap_or(Value::Null))
}

impl From<UpdateUserRequest> for ProfileUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        ProfileUpdate {
            secret: as_sent(req.secret),
            user: as_sent(req.user),
        }
    }
}
