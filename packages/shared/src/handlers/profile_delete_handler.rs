use tracing::{error, info};

use crate::handlers::errors::ProfileSyncError;
use crate::handlers::failure_policy::FailurePolicy;
use crate::handlers::SyncOutcome;
use crate::models::identity::UserIdentity;
use crate::services::profile_service::ProfileService;

/// Removes the profile document of a user the provider has deleted.
#[derive(Clone)]
pub struct ProfileDeleteHandler {
    service: ProfileService,
    failure_policy: FailurePolicy,
}

impl ProfileDeleteHandler {
    pub fn new(service: ProfileService, failure_policy: FailurePolicy) -> Self {
        Self {
            service,
            failure_policy,
        }
    }

    pub async fn handle(&self, identity: &UserIdentity) -> Result<SyncOutcome, ProfileSyncError> {
        let outcome = match self.service.delete_profile(identity).await {
            Ok(()) => {
                info!(
                    uid = %identity.uid,
                    email = identity.email.as_deref(),
                    "User profile deleted"
                );
                SyncOutcome::Deleted
            }
            Err(e) => {
                error!(
                    uid = %identity.uid,
                    email = identity.email.as_deref(),
                    error = %e,
                    "Error deleting user profile from store"
                );
                SyncOutcome::Failed(e)
            }
        };
        self.failure_policy.resolve(outcome)
    }
}
