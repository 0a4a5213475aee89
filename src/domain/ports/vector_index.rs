//! Vector index port.

use async_trait::async_trait;

use crate::domain::errors::RagResult;
use crate::domain::models::FlatMetadata;

/// Raw, undecoded output of a nearest-neighbor query.
///
/// The three vectors are index-aligned: entry `i` of each describes one
/// match. Order is the store's native ranking and must be preserved.
#[derive(Debug, Clone, Default)]
pub struct RawQueryResult {
    pub documents: Vec<String>,
    pub metadatas: Vec<FlatMetadata>,
    pub distances: Vec<f32>,
}

/// Thin contract over the external vector database.
///
/// This port does not rank or score anything itself; it forwards the
/// store's results verbatim.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Upsert a batch of documents.
    ///
    /// All four slices must have equal length; index `i` across them
    /// describes one document. A length mismatch is a caller bug and
    /// yields `RagError::InvalidBatch`.
    async fn upsert(
        &self,
        ids: &[String],
        vectors: &[Vec<f32>],
        metadatas: &[FlatMetadata],
        texts: &[String],
    ) -> RagResult<()>;

    /// Return up to `limit` nearest neighbors of `vector`.
    ///
    /// `filter`, when present, restricts the search to documents whose
    /// stored flat metadata exactly matches every given field. Equality
    /// only; no range or partial matching. `limit` must be at least 1.
    async fn query(
        &self,
        vector: &[f32],
        limit: usize,
        filter: Option<&FlatMetadata>,
    ) -> RagResult<RawQueryResult>;
}
