//! Error taxonomy for the retrieval-augmented answering pipeline.

use thiserror::Error;

/// Errors surfaced by the core pipeline.
///
/// Every dependency failure is logged where it is detected and re-raised
/// to the immediate caller; nothing in this crate retries or swallows an
/// error. The only non-error special case is the "no documents found"
/// short-circuit in answer synthesis, which is a normal outcome.
#[derive(Debug, Error)]
pub enum RagError {
    #[error("embedding service error: {0}")]
    EmbeddingService(String),

    #[error("vector store error: {0}")]
    VectorStore(String),

    #[error("generation service error: {0}")]
    GenerationService(String),

    #[error(
        "mismatched batch arrays: ids={ids}, vectors={vectors}, metadatas={metadatas}, texts={texts}"
    )]
    InvalidBatch {
        ids: usize,
        vectors: usize,
        metadatas: usize,
        texts: usize,
    },

    #[error("bulk ingestion aborted: {0}")]
    BulkIngestion(#[source] Box<RagError>),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Result type alias for pipeline operations.
pub type RagResult<T> = Result<T, RagError>;
