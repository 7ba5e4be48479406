use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::profile::ProfileRecord;
use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;
use crate::repositories::profile_repository::ProfileRepository;

/// Profile store kept in process memory, available to tests through the
/// `test-util` feature.
///
/// A repository built with [`InMemoryProfileRepository::failing`] fails every
/// operation the way DynamoDB does on a permission or connectivity error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, ProfileRecord>>>,
    failure: Option<String>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            profiles: Arc::default(),
            failure: Some(reason.into()),
        }
    }

    pub async fn get(&self, uid: &str) -> Option<ProfileRecord> {
        self.profiles.read().await.get(uid).cloned()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), ProfileRepositoryError> {
        match &self.failure {
            Some(reason) => Err(ProfileRepositoryError::DynamoDb(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn put_profile(&self, profile: &ProfileRecord) -> Result<(), ProfileRepositoryError> {
        self.check_available()?;
        self.profiles
            .write()
            .await
            .insert(profile.uid.clone(), profile.clone());
        Ok(())
    }

    async fn delete_profile(&self, uid: &str) -> Result<(), ProfileRepositoryError> {
        self.check_available()?;
        self.profiles.write().await.remove(uid);
        Ok(())
    }
}
