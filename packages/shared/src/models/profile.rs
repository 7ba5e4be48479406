use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to every newly created profile.
pub const DEFAULT_ROLE: &str = "user";

/// Profile document stored in the `users` collection, keyed by `uid`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProfileRecord {
    pub uid: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub role: String,
}

impl ProfileRecord {
    pub fn new(
        uid: String,
        email: Option<String>,
        created_at: DateTime<Utc>,
        role: String,
    ) -> Self {
        ProfileRecord {
            uid,
            email,
            created_at,
            role,
        }
    }
}
