use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use shared::config::SyncConfig;
use shared::handlers::profile_create_handler::ProfileCreateHandler;
use shared::models::events::CognitoEvent;
use shared::models::identity::UserIdentity;
use shared::repositories::profile_repository::DynamoDbProfileRepository;
use shared::services::profile_service::ProfileService;
use shared::telemetry::{init_tracing, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(LogFormat::from_env());
    let config = SyncConfig::from_env()?;

    let aws_config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let repository = DynamoDbProfileRepository::new(client, config.table_name.clone());
    let handler = ProfileCreateHandler::new(
        ProfileService::new(Arc::new(repository)),
        config.failure_policy,
    );

    info!(
        table = %config.table_name,
        failure_policy = %config.failure_policy,
        "user-signup ready"
    );

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move { user_signup_handler(&handler, event.payload).await }
    }))
    .await
}

/// Cognito expects the trigger event back unchanged.
async fn user_signup_handler(
    handler: &ProfileCreateHandler,
    payload: Value,
) -> Result<Value, Error> {
    let event: CognitoEvent = serde_json::from_value(payload.clone())?;
    if !event.is_sign_up() {
        info!(
            trigger_source = %event.trigger_source,
            uid = %event.user_name,
            "Ignoring post-confirmation trigger that is not a sign-up"
        );
        return Ok(payload);
    }
    let identity = UserIdentity::from(event);
    handler.handle(&identity).await?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;
    use shared::handlers::failure_policy::FailurePolicy;
    use shared::models::events::CONFIRM_SIGN_UP_TRIGGER;
    use shared::repositories::memory_profile_repository::InMemoryProfileRepository;
    use shared::services::clock::FixedClock;
    use shared::services::profile_service::ProfilePolicy;

    fn cognito_event(trigger_source: &str) -> Value {
        json!({
            "triggerSource": trigger_source,
            "userName": "abc123",
            "request": {
                "userAttributes": { "sub": "abc123", "email": "a@example.com" }
            },
            "response": {}
        })
    }

    fn signup_event() -> Value {
        cognito_event(CONFIRM_SIGN_UP_TRIGGER)
    }

    fn handler_for(
        repository: &InMemoryProfileRepository,
        policy: FailurePolicy,
    ) -> ProfileCreateHandler {
        ProfileCreateHandler::new(ProfileService::new(Arc::new(repository.clone())), policy)
    }

    #[tokio::test]
    async fn test_signup_writes_profile_and_echoes_event() {
        let repository = InMemoryProfileRepository::new();
        let handler = handler_for(&repository, FailurePolicy::Swallow);

        let response = user_signup_handler(&handler, signup_event()).await.unwrap();

        assert_eq!(response, signup_event());
        let profile = repository.get("abc123").await.unwrap();
        assert_eq!(profile.email.as_deref(), Some("a@example.com"));
        assert_eq!(profile.role, "user");
    }

    #[tokio::test]
    async fn test_password_reset_leaves_existing_profile_untouched() {
        let repository = InMemoryProfileRepository::new();
        let signed_up_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let reset_at = signed_up_at + Duration::days(30);
        let handler_at = |seen| {
            ProfileCreateHandler::new(
                ProfileService::with_policy(
                    Arc::new(repository.clone()),
                    ProfilePolicy::with_clock(Arc::new(FixedClock(seen))),
                ),
                FailurePolicy::Swallow,
            )
        };

        user_signup_handler(&handler_at(signed_up_at), signup_event())
            .await
            .unwrap();
        let reset = cognito_event("PostConfirmation_ConfirmForgotPassword");
        let response = user_signup_handler(&handler_at(reset_at), reset.clone())
            .await
            .unwrap();

        assert_eq!(response, reset);
        assert_eq!(repository.len().await, 1);
        assert_eq!(
            repository.get("abc123").await.unwrap().created_at,
            signed_up_at
        );
    }

    #[tokio::test]
    async fn test_password_reset_for_unknown_user_writes_nothing() {
        let repository = InMemoryProfileRepository::new();
        let handler = handler_for(&repository, FailurePolicy::Propagate);

        let reset = cognito_event("PostConfirmation_ConfirmForgotPassword");
        user_signup_handler(&handler, reset).await.unwrap();

        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_signup_store_failure_still_completes() {
        let repository = InMemoryProfileRepository::failing("permission denied");
        let handler = handler_for(&repository, FailurePolicy::Swallow);

        let response = user_signup_handler(&handler, signup_event()).await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_signup_store_failure_propagates_when_configured() {
        let repository = InMemoryProfileRepository::failing("permission denied");
        let handler = handler_for(&repository, FailurePolicy::Propagate);

        assert!(user_signup_handler(&handler, signup_event()).await.is_err());
    }

    #[tokio::test]
    async fn test_signup_rejects_malformed_event() {
        let repository = InMemoryProfileRepository::new();
        let handler = handler_for(&repository, FailurePolicy::Swallow);

        let result = user_signup_handler(&handler, json!({ "request": {} })).await;

        assert!(result.is_err());
        assert!(repository.is_empty().await);
    }
}
