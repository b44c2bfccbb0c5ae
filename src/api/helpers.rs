//! Response builders shared by the API handler.
//!
//! Every response carries a JSON body and a `Content-Type: application/json`
//! header, whether it reports blocks or an error.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::models::{BlocksBody, ErrorBody, ResponseEnvelope};

pub const VALIDATION_ERROR_KIND: &str = "ValueError";
pub const INTERNAL_ERROR_KIND: &str = "InternalServerError";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred. Check logs for details.";

// Rendered by hand if serialization ever fails so the envelope stays valid JSON.
const FALLBACK_ERROR_BODY: &str = r#"{"Error":"InternalServerError","ErrorMessage":"An internal error occurred. Check logs for details."}"#;

fn json_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

fn envelope<T: Serialize>(status_code: u16, body: &T) -> ResponseEnvelope {
    match serde_json::to_string(body) {
        Ok(body) => ResponseEnvelope {
            status_code,
            headers: json_headers(),
            body,
        },
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            ResponseEnvelope {
                status_code: 500,
                headers: json_headers(),
                body: FALLBACK_ERROR_BODY.to_string(),
            }
        }
    }
}

/// Returns a 200 OK response carrying the detected blocks.
#[must_use]
pub fn ok_blocks(blocks: &[Value]) -> ResponseEnvelope {
    envelope(200, &BlocksBody { blocks })
}

/// Returns an error response with the given status code, error kind and message.
///
/// # Examples
///
/// ```
/// use doctext::api::helpers::build_error_envelope;
///
/// let response = build_error_envelope(400, "ValueError", "Missing request body");
/// assert_eq!(response.status_code, 400);
/// assert_eq!(
///     response.body,
///     r#"{"Error":"ValueError","ErrorMessage":"Missing request body"}"#
/// );
/// ```
#[must_use]
pub fn build_error_envelope(status_code: u16, error_kind: &str, message: &str) -> ResponseEnvelope {
    envelope(
        status_code,
        &ErrorBody {
            error: error_kind,
            error_message: message,
        },
    )
}

/// Returns a 400 response for a caller-side validation failure.
#[must_use]
pub fn validation_error(message: &str) -> ResponseEnvelope {
    build_error_envelope(400, VALIDATION_ERROR_KIND, message)
}

/// Returns the generic 500 response; the cause is only ever logged.
#[must_use]
pub fn internal_error() -> ResponseEnvelope {
    build_error_envelope(500, INTERNAL_ERROR_KIND, INTERNAL_ERROR_MESSAGE)
}
