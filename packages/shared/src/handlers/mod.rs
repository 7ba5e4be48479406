pub mod errors;
pub mod failure_policy;
pub mod profile_create_handler;
pub mod profile_delete_handler;

use crate::models::profile::ProfileRecord;
use crate::services::errors::profile_service_errors::ProfileServiceError;

/// What a handler invocation did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Created(ProfileRecord),
    Deleted,
    Failed(ProfileServiceError),
}

impl SyncOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SyncOutcome::Failed(_))
    }
}
