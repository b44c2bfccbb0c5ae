use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Reference to a document stored in S3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3ObjectRef {
    pub bucket: String,
    pub name: String,
}

/// Where the document bytes come from, normalized for the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Bytes(Vec<u8>),
    S3Object(S3ObjectRef),
}

impl DocumentSource {
    /// Short description for logs; never includes document content.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::Bytes(bytes) => format!("inline image ({} bytes)", bytes.len()),
            DocumentSource::S3Object(obj) => format!("s3://{}/{}", obj.bucket, obj.name),
        }
    }
}

/// Blocks returned by the analysis service, in service order.
pub type AnalysisResult = Vec<Value>;

/// HTTP response shape expected by API Gateway proxy integrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BlocksBody<'a> {
    #[serde(rename = "Blocks")]
    pub blocks: &'a [Value],
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody<'a> {
    #[serde(rename = "Error")]
    pub error: &'a str,
    #[serde(rename = "ErrorMessage")]
    pub error_message: &'a str,
}
