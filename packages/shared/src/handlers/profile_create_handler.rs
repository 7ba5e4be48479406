use tracing::{error, info};

use crate::handlers::errors::ProfileSyncError;
use crate::handlers::failure_policy::FailurePolicy;
use crate::handlers::SyncOutcome;
use crate::models::identity::UserIdentity;
use crate::services::profile_service::ProfileService;

/// Mirrors a "user created" event into the store as a fresh profile document.
#[derive(Clone)]
pub struct ProfileCreateHandler {
    service: ProfileService,
    failure_policy: FailurePolicy,
}

impl ProfileCreateHandler {
    pub fn new(service: ProfileService, failure_policy: FailurePolicy) -> Self {
        Self {
            service,
            failure_policy,
        }
    }

    pub async fn handle(&self, identity: &UserIdentity) -> Result<SyncOutcome, ProfileSyncError> {
        let outcome = match self.service.create_profile(identity).await {
            Ok(profile) => {
                info!(
                    uid = %profile.uid,
                    email = profile.email.as_deref(),
                    "User profile created"
                );
                SyncOutcome::Created(profile)
            }
            Err(e) => {
                error!(
                    uid = %identity.uid,
                    email = identity.email.as_deref(),
                    error = %e,
                    "Error writing user profile to store"
                );
                SyncOutcome::Failed(e)
            }
        };
        self.failure_policy.resolve(outcome)
    }
}
