//! HTTP client for the external embedding server.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{RagError, RagResult};
use crate::domain::ports::EmbeddingProvider;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct EmbedBatchRequest<'a> {
    texts: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedBatchResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Client for the embedding server's `/embed` and `/health` endpoints.
///
/// Owns text normalization: every text is trimmed, internal whitespace
/// runs are collapsed to single spaces, and the result is lowercased
/// before it leaves the process. Indexing and querying go through the
/// same path, so similarity is always computed on normalized text.
pub struct HttpEmbeddingClient {
    http: ReqwestClient,
    base_url: String,
}

impl HttpEmbeddingClient {
    pub fn new(http: ReqwestClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Normalize text before embedding.
    fn preprocess(text: &str) -> String {
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingClient {
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        let normalized = Self::preprocess(text);

        let response = self
            .http
            .post(format!("{}/embed", self.base_url))
            .json(&EmbedRequest { text: &normalized })
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "embedding request failed");
                RagError::EmbeddingService(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "embedding server returned an error");
            return Err(RagError::EmbeddingService(format!(
                "embedding server returned {status}"
            )));
        }

        let body: EmbedResponse = response
            .json()
            .await
            .map_err(|err| RagError::EmbeddingService(err.to_string()))?;

        Ok(body.embedding)
    }

    async fn embed_batch(&self, texts: &[String]) -> RagResult<Vec<Vec<f32>>> {
        let normalized: Vec<String> = texts.iter().map(|t| Self::preprocess(t)).collect();

        let response = self
            .http
            .post(format!("{}/embed_batch", self.base_url))
            .json(&EmbedBatchRequest { texts: &normalized })
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "batch embedding request failed");
                RagError::EmbeddingService(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "embedding server returned an error");
            return Err(RagError::EmbeddingService(format!(
                "embedding server returned {status}"
            )));
        }

        let body: EmbedBatchResponse = response
            .json()
            .await
            .map_err(|err| RagError::EmbeddingService(err.to_string()))?;

        Ok(body.embeddings)
    }

    async fn health_check(&self) -> RagResult<()> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "embedding server unreachable");
                RagError::EmbeddingService(err.to_string())
            })?;

        if !response.status().is_success() {
            return Err(RagError::EmbeddingService(format!(
                "embedding server health check returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
