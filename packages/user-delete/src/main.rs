use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::info;

use shared::config::SyncConfig;
use shared::handlers::profile_delete_handler::ProfileDeleteHandler;
use shared::models::events::EventBridgeEvent;
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
    let handler = ProfileDeleteHandler::new(
        ProfileService::new(Arc::new(repository)),
        config.failure_policy,
    );

    info!(
        table = %config.table_name,
        failure_policy = %config.failure_policy,
        "user-delete ready"
    );

    run(service_fn(move |event: LambdaEvent<EventBridgeEvent>| {
        let handler = handler.clone();
        async move { user_delete_handler(&handler, event.payload).await }
    }))
    .await
}

async fn user_delete_handler(
    handler: &ProfileDeleteHandler,
    event: EventBridgeEvent,
) -> Result<(), Error> {
    let identity = UserIdentity::from(event);
    handler.handle(&identity).await?;
    Ok(())
}
