use crate::services::errors::profile_service_errors::ProfileServiceError;

/// Returned to the event source when a failed store call is propagated.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSyncError {
    Service(ProfileServiceError),
}

impl std::fmt::Display for ProfileSyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSyncError::Service(err) => write!(f, "Profile sync failed: {}", err),
        }
    }
}

impl std::error::Error for ProfileSyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileSyncError::Service(err) => Some(err),
        }
    }
}

impl From<ProfileServiceError> for ProfileSyncError {
    fn from(err: ProfileServiceError) -> Self {
        ProfileSyncError::Service(err)
    }
}
