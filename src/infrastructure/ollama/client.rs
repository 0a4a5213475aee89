//! HTTP client for an Ollama-compatible generation server.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{RagError, RagResult};
use crate::domain::ports::GenerationClient;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Non-streaming client for `POST /api/generate`.
pub struct OllamaClient {
    http: ReqwestClient,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(
        http: ReqwestClient,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> RagResult<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "generation request failed");
                RagError::GenerationService(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "generation server returned an error");
            return Err(RagError::GenerationService(format!(
                "generation server returned {status}"
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| RagError::GenerationService(err.to_string()))?;

        Ok(body.response)
    }
}
