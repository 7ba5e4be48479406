use crate::models::profile::ProfileRecord;
use crate::repositories::errors::profile_repository_errors::ProfileRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

/// Partition key attribute of the users table.
pub const PROFILE_KEY_ATTRIBUTE: &str = "uid";

/// Document store holding one profile per uid.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Writes the whole profile document, replacing any document stored under the same uid.
    async fn put_profile(&self, profile: &ProfileRecord) -> Result<(), ProfileRepositoryError>;
    /// Removes the profile stored under `uid`. Removing a missing profile succeeds.
    async fn delete_profile(&self, uid: &str) -> Result<(), ProfileRepositoryError>;
}

pub struct DynamoDbProfileRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbProfileRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ProfileRepository for DynamoDbProfileRepository {
    async fn put_profile(&self, profile: &ProfileRecord) -> Result<(), ProfileRepositoryError> {
        let item =
            to_item(profile).map_err(|e| ProfileRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| ProfileRepositoryError::DynamoDb(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    async fn delete_profile(&self, uid: &str) -> Result<(), ProfileRepositoryError> {
        // No condition expression: deleting an absent key is a successful no-op.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                PROFILE_KEY_ATTRIBUTE,
                to_attribute_value(uid)
                    .map_err(|e| ProfileRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| ProfileRepositoryError::DynamoDb(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
