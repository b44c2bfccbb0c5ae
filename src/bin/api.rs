use doctext::api::{RequestHandler, handler};
use doctext::core::config::AppConfig;
use doctext::textract::TextractService;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    doctext::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Built once per container and shared by every invocation.
    let service = TextractService::from_config(&config).await.map_err(|e| {
        error!("Failed to initialize Textract client: {:#}", e);
        Error::from(e)
    })?;
    let request_handler = RequestHandler::new(service);
    let request_handler = &request_handler;

    lambda_runtime::run(lambda_runtime::service_fn(
        move |event: LambdaEvent<Value>| async move { handler(request_handler, event).await },
    ))
    .await
}
