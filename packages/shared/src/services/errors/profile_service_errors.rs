use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileServiceError {
    ValidationError(String),
    StoreWriteFailure(ProfileRepositoryError),
    StoreDeleteFailure(ProfileRepositoryError),
}

impl std::fmt::Display for ProfileServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ProfileServiceError::StoreWriteFailure(err) => {
                write!(f, "Failed to write profile: {}", err)
            }
            ProfileServiceError::StoreDeleteFailure(err) => {
                write!(f, "Failed to delete profile: {}", err)
            }
        }
    }
}

impl std::error::Error for ProfileServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileServiceError::ValidationError(_) => None,
            ProfileServiceError::StoreWriteFailure(err)
            | ProfileServiceError::StoreDeleteFailure(err) => Some(err),
        }
    }
}
