use crate::domain::{meeting::MeetingCode, user::User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile returned by the "who am I" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub is_anonymous: bool,
    /// Code of the guest's most recent meeting. Only set for anonymous users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_code: Option<String>,
}

impl UserProfileDto {
    pub fn from_parts(user: User, meeting_code: Option<MeetingCode>) -> Self {
        let is_anonymous = user.is_anonymous();
        Self {
            id: user.id.into(),
            email: user.email,
            name: user.name,
            is_anonymous,
            meeting_code: meeting_code.map(Into::into),
        }
    }
}
