/// doctext - A Lambda function that extracts text from documents with Amazon Textract.
///
/// The API Lambda accepts an HTTP-triggered event whose JSON body carries
/// either an inline base64 image or a reference to an S3 object, calls
/// Textract `DetectDocumentText` once, and answers with the detected blocks
/// or a structured error.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - aws-sdk-textract for document text detection
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use doctext::api::RequestHandler;
/// use doctext::core::config::AppConfig;
/// use doctext::textract::TextractService;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     doctext::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let handler = RequestHandler::new(TextractService::from_config(&config).await?);
///
///     let event = serde_json::json!({
///         "body": r#"{"S3Object": {"Bucket": "my-bucket", "Name": "scan.png"}}"#
///     });
///     let response = handler.handle(&event).await;
///     println!("{}: {}", response.status_code, response.body);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod textract;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// doctext::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
