use base64::Engine;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;
use tracing::error;

use crate::core::models::{DocumentSource, S3ObjectRef};
use crate::errors::RequestError;

// Padded standard alphabet; non-zero trailing bits in the last symbol are ignored.
const IMAGE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

pub const MISSING_BODY_MESSAGE: &str = "Missing request body";
pub const INVALID_BASE64_MESSAGE: &str = "Invalid base64 image encoding";
pub const INVALID_S3_OBJECT_MESSAGE: &str =
    "Invalid S3Object structure, required: 'Bucket' and 'Name'";
pub const MISSING_SOURCE_MESSAGE: &str =
    "Invalid input: Provide 'image' as base64 or 'S3Object' with bucket and name";

/// Null, `false`, zero and empty strings, objects or arrays count as no body.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

pub fn extract_body(payload: &Value) -> Result<&Value, RequestError> {
    match payload.get("body") {
        Some(body) if !is_falsy(body) => Ok(body),
        _ => {
            error!("Request missing body");
            Err(RequestError::validation(MISSING_BODY_MESSAGE))
        }
    }
}

/// Parses the body string as JSON. Anything that is not valid JSON text is
/// reported as a handler error rather than a validation error.
pub fn parse_request_body(body: &Value) -> Result<Value, RequestError> {
    let Some(body_str) = body.as_str() else {
        return Err(RequestError::Internal(format!(
            "Request body is not a string: {body}"
        )));
    };
    Ok(serde_json::from_str(body_str)?)
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Decodes a standard, padded base64 string. ASCII whitespace (line
/// wrapping) is skipped; any other character outside the alphabet is rejected.
pub fn decode_image(image: &Value) -> Result<Vec<u8>, RequestError> {
    let Some(encoded) = image.as_str() else {
        error!("Error decoding base64 image: value is not a string");
        return Err(RequestError::validation(INVALID_BASE64_MESSAGE));
    };

    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    IMAGE_ENGINE.decode(compact).map_err(|e| {
        error!("Error decoding base64 image: {}", e);
        RequestError::validation(INVALID_BASE64_MESSAGE)
    })
}

fn s3_object_ref(request: &Value) -> Result<S3ObjectRef, RequestError> {
    let bucket = v_str(request, &["S3Object", "Bucket"]);
    let name = v_str(request, &["S3Object", "Name"]);

    match (bucket, name) {
        (Some(bucket), Some(name)) => Ok(S3ObjectRef {
            bucket: bucket.to_string(),
            name: name.to_string(),
        }),
        _ => {
            let s3_object = request.get("S3Object").cloned().unwrap_or_default();
            error!(
                s3_object = %s3_object,
                "Missing or non-string key in S3Object structure"
            );
            Err(RequestError::validation(INVALID_S3_OBJECT_MESSAGE))
        }
    }
}

/// Resolves the parsed request into a document source. `image` is checked
/// before `S3Object`; a non-object request carries neither.
pub fn resolve_source(request: &Value) -> Result<DocumentSource, RequestError> {
    if let Some(image) = request.get("image") {
        return decode_image(image).map(DocumentSource::Bytes);
    }

    if request.get("S3Object").is_some() {
        return s3_object_ref(request).map(DocumentSource::S3Object);
    }

    Err(RequestError::validation(MISSING_SOURCE_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_follow_truthiness_rules() {
        for v in [json!(null), json!(""), json!(false), json!(0), json!({}), json!([])] {
            assert!(is_falsy(&v), "{v} should be falsy");
        }
        for v in [json!("{}"), json!(true), json!(1), json!({"a": 1}), json!([0])] {
            assert!(!is_falsy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn image_takes_precedence_over_s3_object() {
        let request = json!({
            "image": "aGVsbG8=",
            "S3Object": {"Bucket": "b", "Name": "n"}
        });
        let source = resolve_source(&request).unwrap();
        assert_eq!(source, DocumentSource::Bytes(b"hello".to_vec()));
    }

    #[test]
    fn line_wrapped_image_is_decoded() {
        let source = resolve_source(&json!({"image": "aGVs\nbG8=\r\n"})).unwrap();
        assert_eq!(source, DocumentSource::Bytes(b"hello".to_vec()));
    }

    #[test]
    fn trailing_bits_in_image_are_ignored() {
        let source = resolve_source(&json!({"image": "aGVsbG9="})).unwrap();
        assert_eq!(source, DocumentSource::Bytes(b"hello".to_vec()));
    }

    #[test]
    fn characters_outside_alphabet_are_rejected() {
        let err = resolve_source(&json!({"image": "not_valid_base64!!"})).unwrap_err();
        assert_eq!(err.to_string(), INVALID_BASE64_MESSAGE);
    }

    #[test]
    fn non_string_image_is_invalid_base64() {
        let err = resolve_source(&json!({"image": 42})).unwrap_err();
        assert_eq!(err.to_string(), INVALID_BASE64_MESSAGE);
    }

    #[test]
    fn non_object_s3_reference_is_invalid_structure() {
        let err = resolve_source(&json!({"S3Object": "bucket/name"})).unwrap_err();
        assert_eq!(err.to_string(), INVALID_S3_OBJECT_MESSAGE);
    }

    #[test]
    fn non_object_request_has_no_source() {
        let err = resolve_source(&json!(["image"])).unwrap_err();
        assert_eq!(err.to_string(), MISSING_SOURCE_MESSAGE);
    }

    #[test]
    fn non_string_body_is_not_a_validation_error() {
        let err = parse_request_body(&json!({"image": "aGVsbG8="})).unwrap_err();
        assert!(matches!(err, RequestError::Internal(_)));
    }
}
