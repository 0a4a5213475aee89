//! Embedding provider port.

use async_trait::async_trait;

use crate::domain::errors::RagResult;

/// Trait for services that turn text into fixed-length vectors.
///
/// All documents in one collection must share a single vector dimension;
/// that dimension is a contract with the external embedding model, not
/// something this crate checks or enforces.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text.
    ///
    /// Implementations own text normalization and must apply it
    /// identically on the indexing and query paths.
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>>;

    /// Generate embeddings for multiple texts in one call.
    async fn embed_batch(&self, texts: &[String]) -> RagResult<Vec<Vec<f32>>>;

    /// Check that the provider is reachable and ready.
    ///
    /// Queried once at startup; failure is fatal to initialization.
    async fn health_check(&self) -> RagResult<()>;
}
