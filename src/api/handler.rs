//! API Lambda handler.
//!
//! This module handles:
//! - Body validation and JSON parsing (delegated to `parsing`)
//! - Document source resolution (inline base64 image or S3 reference)
//! - The single downstream text detection call
//! - Mapping every outcome onto a response envelope (delegated to `helpers`)

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::models::{AnalysisResult, ResponseEnvelope};
use crate::errors::RequestError;
use crate::textract::DocumentAnalysis;

pub use self::function_handler as handler;

/// Result of processing one invocation, before it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(AnalysisResult),
    ValidationError(String),
    InternalError(String),
}

impl Outcome {
    /// Renders the outcome. Internal error details are never included.
    #[must_use]
    pub fn into_envelope(self) -> ResponseEnvelope {
        match self {
            Outcome::Success(blocks) => helpers::ok_blocks(&blocks),
            Outcome::ValidationError(message) => helpers::validation_error(&message),
            Outcome::InternalError(_) => helpers::internal_error(),
        }
    }
}

impl From<Result<AnalysisResult, RequestError>> for Outcome {
    fn from(result: Result<AnalysisResult, RequestError>) -> Self {
        match result {
            Ok(blocks) => Outcome::Success(blocks),
            Err(RequestError::Validation(message)) => Outcome::ValidationError(message),
            Err(other) => Outcome::InternalError(other.to_string()),
        }
    }
}

/// Handles document text detection requests against an injected backend.
pub struct RequestHandler<S> {
    service: S,
}

impl<S: DocumentAnalysis> RequestHandler<S> {
    #[must_use]
    pub fn new(service: S) -> Self {
        Self { service }
    }

    async fn process(&self, event: &Value) -> Result<AnalysisResult, RequestError> {
        let body = parsing::extract_body(event)?;
        let request = parsing::parse_request_body(body)?;
        let source = parsing::resolve_source(&request)?;

        info!(source = %source.describe(), "Calling Textract DetectDocumentText");
        let blocks = self.service.detect_document_text(&source).await?;

        #[cfg(feature = "debug-logs")]
        info!("Textract returned blocks: {:?}", blocks);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            block_count = blocks.len(),
            "Successfully processed document with Textract."
        );

        Ok(blocks)
    }

    /// Runs one invocation to an [`Outcome`], converting panics into
    /// internal errors.
    pub async fn evaluate(&self, event: &Value) -> Outcome {
        match AssertUnwindSafe(self.process(event)).catch_unwind().await {
            Ok(result) => Outcome::from(result),
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(ToString::to_string)
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Outcome::InternalError(format!("Handler panicked: {reason}"))
            }
        }
    }

    /// Turns an invocation event into a response envelope. Never fails.
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        info!("Received event: {}", event);

        let outcome = self.evaluate(event).await;
        match &outcome {
            Outcome::Success(_) => {}
            Outcome::ValidationError(message) => error!("Input validation error: {}", message),
            Outcome::InternalError(cause) => error!("Unexpected error: {}", cause),
        }
        outcome.into_envelope()
    }
}

/// Lambda entry point. Always answers with an envelope; the `Err` arm exists
/// only to satisfy the runtime's service signature.
///
/// # Errors
///
/// Never returns an error.
#[tracing::instrument(level = "info", skip(handler, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<S: DocumentAnalysis>(
    handler: &RequestHandler<S>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    Ok(handler.handle(&event.payload).await)
}
