//! Client for the external feature-extraction service.
//!
//! The service receives the raw query string and returns a fixed-length
//! vector; the catalog never runs model inference itself. A failing service
//! surfaces as an error to the caller. There is no silent fallback to
//! lexical search once an endpoint is configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SNIPPET_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Endpoint is empty or not http/https.
    #[error("invalid embedding endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        snippet: String,
    },
}

/// Seam for the embedding collaborator; the HTTP client below is the only
/// production implementation.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

#[derive(Debug, Clone)]
pub struct HttpEmbedder {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    pub fn new(endpoint: &str) -> Result<Self, EmbeddingError> {
        let trimmed = endpoint.trim_end_matches('/');
        if trimmed.is_empty() || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
        {
            return Err(EmbeddingError::InvalidEndpoint(endpoint.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: trimmed.to_string(),
        })
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/embed", self.endpoint);
        let response = self
            .http
            .post(&url)
            .json(&EmbedRequest { input: text })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let snippet: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(SNIPPET_LEN)
                .collect();
            return Err(EmbeddingError::HttpStatus {
                status,
                url,
                snippet,
            });
        }
        let body: EmbedResponse = response.json().await?;
        debug!(dim = body.embedding.len(), "embedding received");
        Ok(body.embedding)
    }
}
