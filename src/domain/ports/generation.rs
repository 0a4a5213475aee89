//! Generation model port.

use async_trait::async_trait;

use crate::domain::errors::RagResult;

/// Trait for the external generative text model.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Produce a completion for `prompt`, non-streaming.
    ///
    /// Any transport failure or non-success response is
    /// `RagError::GenerationService` and is fatal to the request.
    async fn generate(&self, prompt: &str) -> RagResult<String>;
}
