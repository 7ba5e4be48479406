use std::sync::Arc;

use crate::models::identity::UserIdentity;
use crate::models::profile::{ProfileRecord, DEFAULT_ROLE};
use crate::repositories::profile_repository::ProfileRepository;
use crate::services::clock::{Clock, SystemClock};
use crate::services::errors::profile_service_errors::ProfileServiceError;

/// Fields of a new profile that are not copied from the identity.
#[derive(Clone)]
pub struct ProfilePolicy {
    pub default_role: String,
    pub clock: Arc<dyn Clock>,
}

impl ProfilePolicy {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        ProfilePolicy {
            default_role: DEFAULT_ROLE.to_string(),
            clock,
        }
    }

    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }
}

impl Default for ProfilePolicy {
    fn default() -> Self {
        ProfilePolicy::with_clock(Arc::new(SystemClock))
    }
}

#[derive(Clone)]
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    policy: ProfilePolicy,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        ProfileService::with_policy(repository, ProfilePolicy::default())
    }

    pub fn with_policy(repository: Arc<dyn ProfileRepository>, policy: ProfilePolicy) -> Self {
        ProfileService { repository, policy }
    }

    pub fn build_profile(&self, identity: &UserIdentity) -> ProfileRecord {
        ProfileRecord::new(
            identity.uid.clone(),
            identity.profile_email(),
            self.policy.clock.now(),
            self.policy.default_role.clone(),
        )
    }

    pub async fn create_profile(
        &self,
        identity: &UserIdentity,
    ) -> Result<ProfileRecord, ProfileServiceError> {
        validate_uid(&identity.uid)?;
        let profile = self.build_profile(identity);
        self.repository
            .put_profile(&profile)
            .await
            .map_err(ProfileServiceError::StoreWriteFailure)?;
        Ok(profile)
    }

    pub async fn delete_profile(&self, identity: &UserIdentity) -> Result<(), ProfileServiceError> {
        validate_uid(&identity.uid)?;
        self.repository
            .delete_profile(&identity.uid)
            .await
            .map_err(ProfileServiceError::StoreDeleteFailure)
    }
}

fn validate_uid(uid: &str) -> Result<(), ProfileServiceError> {
    if uid.is_empty() {
        return Err(ProfileServiceError::ValidationError(
            "User ID cannot be empty".to_string(),
        ));
    }
    Ok(())
}
