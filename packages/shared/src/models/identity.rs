use serde::{Deserialize, Serialize};

/// Identity payload carried by the provider's user lifecycle events.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UserIdentity {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserIdentity {
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        UserIdentity {
            uid: uid.into(),
            email,
        }
    }

    /// Email as it should be stored on the profile. An empty email is
    /// stored as null, the same as a missing one.
    pub fn profile_email(&self) -> Option<String> {
        self.email
            .as_deref()
            .filter(|email| !email.is_empty())
            .map(str::to_string)
    }
}
