use serde::Deserialize;

use crate::models::identity::UserIdentity;

/// Trigger source Cognito sends when a new user confirms sign-up.
pub const CONFIRM_SIGN_UP_TRIGGER: &str = "PostConfirmation_ConfirmSignUp";

/// Cognito post-confirmation trigger payload. Only the fields the profile
/// needs are decoded.
///
/// Profiles are keyed on the pool `userName`, the same identifier the
/// deletion event carries.
#[derive(Debug, Deserialize)]
pub struct CognitoEvent {
    #[serde(rename = "triggerSource")]
    pub trigger_source: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub request: Request,
}

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(rename = "userAttributes")]
    pub user_attributes: UserAttributes,
}

#[derive(Debug, Deserialize)]
pub struct UserAttributes {
    #[serde(default)]
    pub email: Option<String>,
}

impl CognitoEvent {
    /// Post-confirmation also fires after a password reset; only a confirmed
    /// sign-up creates a user.
    pub fn is_sign_up(&self) -> bool {
        self.trigger_source == CONFIRM_SIGN_UP_TRIGGER
    }
}

impl From<CognitoEvent> for UserIdentity {
    fn from(event: CognitoEvent) -> Self {
        UserIdentity::new(event.user_name, event.request.user_attributes.email)
    }
}

/// EventBridge envelope announcing a deleted user.
#[derive(Debug, Deserialize)]
pub struct EventBridgeEvent {
    pub detail: Detail,
}

#[derive(Debug, Deserialize)]
pub struct Detail {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<EventBridgeEvent> for UserIdentity {
    fn from(event: EventBridgeEvent) -> Self {
        UserIdentity::new(event.detail.user_name, event.detail.email)
    }
}
