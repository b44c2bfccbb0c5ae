//! Document text detection backends.
//!
//! The handler talks to [`DocumentAnalysis`]; [`TextractService`] is the
//! Amazon Textract implementation used by the Lambda binary.

pub mod blocks;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use aws_sdk_textract::Client as TextractClient;
use aws_sdk_textract::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{Document, S3Object};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::{AnalysisResult, DocumentSource};
use crate::errors::AnalysisError;

/// Capability to detect text blocks in a document.
///
/// Implementations are built once per process and shared by every
/// invocation, so they must not hold per-call mutable state.
#[async_trait]
pub trait DocumentAnalysis: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AnalysisError::Service`] when the service rejects the
    /// document, and [`AnalysisError::Unexpected`] for any other failure.
    async fn detect_document_text(
        &self,
        source: &DocumentSource,
    ) -> Result<AnalysisResult, AnalysisError>;
}

#[async_trait]
impl<T: DocumentAnalysis + ?Sized> DocumentAnalysis for Arc<T> {
    async fn detect_document_text(
        &self,
        source: &DocumentSource,
    ) -> Result<AnalysisResult, AnalysisError> {
        (**self).detect_document_text(source).await
    }
}

/// Amazon Textract client wrapper.
#[derive(Debug, Clone)]
pub struct TextractService {
    client: TextractClient,
}

impl TextractService {
    #[must_use]
    pub fn new(client: TextractClient) -> Self {
        Self { client }
    }

    /// Builds the client from the shared AWS environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no AWS region can be resolved.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let shared_config = aws_config::from_env().load().await;
        let region = shared_config
            .region()
            .ok_or_else(|| anyhow!("no AWS region configured"))
            .context("Failed to initialize Textract client")?;

        let mut builder = aws_sdk_textract::config::Builder::from(&shared_config);
        if let Some(endpoint_url) = &config.textract_endpoint_url {
            info!(endpoint_url = %endpoint_url, "Using Textract endpoint override");
            builder = builder.endpoint_url(endpoint_url);
        }

        info!(region = %region, "Successfully initialized Textract client.");
        Ok(Self::new(TextractClient::from_conf(builder.build())))
    }
}

fn to_document(source: &DocumentSource) -> Document {
    match source {
        DocumentSource::Bytes(bytes) => Document::builder()
            .bytes(Blob::new(bytes.clone()))
            .build(),
        DocumentSource::S3Object(obj) => Document::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&obj.bucket)
                    .name(&obj.name)
                    .build(),
            )
            .build(),
    }
}

fn classify<E, R>(err: &SdkError<E, R>) -> AnalysisError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(service_err) => {
            let inner = service_err.err();
            AnalysisError::Service {
                code: inner.code().unwrap_or("Unknown").to_string(),
                message: inner.message().unwrap_or("no message").to_string(),
            }
        }
        other => AnalysisError::Unexpected(DisplayErrorContext(other).to_string()),
    }
}

#[async_trait]
impl DocumentAnalysis for TextractService {
    async fn detect_document_text(
        &self,
        source: &DocumentSource,
    ) -> Result<AnalysisResult, AnalysisError> {
        let output = self
            .client
            .detect_document_text()
            .document(to_document(source))
            .send()
            .await
            .map_err(|e| {
                let classified = classify(&e);
                error!("Textract DetectDocumentText failed: {}", classified);
                classified
            })?;

        Ok(output
            .blocks
            .unwrap_or_default()
            .iter()
            .map(blocks::block_to_json)
            .collect())
    }
}
