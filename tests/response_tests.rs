use doctext::api::helpers::{
    build_error_envelope, internal_error, ok_blocks, validation_error,
};
use serde_json::json;

/// Tests for the response envelope builders
/// These verify the API Gateway proxy shape and the two body formats.

#[test]
fn test_error_envelope_shape() {
    let response = build_error_envelope(400, "ValueError", "Missing request body");

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        response.body,
        r#"{"Error":"ValueError","ErrorMessage":"Missing request body"}"#
    );
}

#[test]
fn test_envelope_serializes_status_code_key() {
    let response = validation_error("Invalid base64 image encoding");
    let payload_str = serde_json::to_string(&response).unwrap();

    assert!(
        payload_str.contains("\"statusCode\":400"),
        "Envelope should use the statusCode key"
    );
    assert!(
        payload_str.contains("\"Content-Type\":\"application/json\""),
        "Envelope should declare a JSON content type"
    );
}

#[test]
fn test_internal_error_is_generic() {
    let response = internal_error();

    assert_eq!(response.status_code, 500);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&response.body).unwrap(),
        json!({
            "Error": "InternalServerError",
            "ErrorMessage": "An internal error occurred. Check logs for details."
        })
    );
}

#[test]
fn test_ok_blocks_passes_records_through() {
    let blocks = vec![
        json!({"BlockType": "PAGE", "Id": "p1"}),
        json!({"BlockType": "LINE", "Text": "hi", "Id": "l1"}),
    ];
    let response = ok_blocks(&blocks);

    assert_eq!(response.status_code, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body, json!({ "Blocks": blocks }));
}

#[test]
fn test_error_message_is_escaped() {
    let response = build_error_envelope(
        400,
        "ValueError",
        "Invalid S3Object structure, required: 'Bucket' and 'Name'",
    );
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body["ErrorMessage"],
        "Invalid S3Object structure, required: 'Bucket' and 'Name'"
    );
}
