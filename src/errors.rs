use thiserror::Error;

/// Message returned when the service rejected the document.
pub const TEXTRACT_SERVICE_MESSAGE: &str = "Error processing document with Textract";

/// Message returned for any other failure while calling the service.
pub const TEXTRACT_UNEXPECTED_MESSAGE: &str = "Unexpected error occurred while processing document";

/// Failures raised while turning an invocation into a response.
///
/// `Validation` is the caller's fault and maps to a 400; everything else maps
/// to a 500 whose details stay in the logs.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to parse request body as JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Internal handler error: {0}")]
    Internal(String),
}

impl RequestError {
    #[must_use]
    pub fn validation(message: &str) -> Self {
        RequestError::Validation(message.to_string())
    }
}

/// Failures reported by a document analysis backend.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The service answered with a classified error response.
    #[error("Textract service error {code}: {message}")]
    Service { code: String, message: String },

    #[error("Unexpected error calling Textract: {0}")]
    Unexpected(String),
}

// Downstream failures are reported to the caller as validation errors.
impl From<AnalysisError> for RequestError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::Service { .. } => RequestError::validation(TEXTRACT_SERVICE_MESSAGE),
            AnalysisError::Unexpected(_) => RequestError::validation(TEXTRACT_UNEXPECTED_MESSAGE),
        }
    }
}
