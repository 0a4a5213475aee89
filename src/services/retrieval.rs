//! Similarity search over the indexed corpus.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{metadata, MetadataValue, SearchResult, StructuredMetadata};
use crate::domain::ports::{EmbeddingProvider, VectorIndex};

/// Default number of matches returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

/// Limit used by the category-listing operations, wide enough to sweep
/// the whole corpus.
const CATEGORY_SWEEP_LIMIT: usize = 100;

/// Performs similarity searches and decodes results back into
/// structured metadata.
pub struct RetrievalEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
}

impl RetrievalEngine {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn VectorIndex>) -> Self {
        Self { embedder, index }
    }

    /// Search the corpus for the `limit` nearest documents to `query`.
    ///
    /// An empty query is legal; combined with a filter it acts as a
    /// "match everything in this slice" idiom. The optional structured
    /// filter is flattened to the store's encoding before querying, so
    /// it matches documents by their stored form. Result order is the
    /// store's ranking, passed through untouched.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        filter: Option<&StructuredMetadata>,
    ) -> RagResult<Vec<SearchResult>> {
        if limit == 0 {
            return Err(RagError::Validation(
                "search limit must be at least 1".to_string(),
            ));
        }

        let query_vector = self.embedder.embed(query).await?;
        let flat_filter = filter.map(metadata::encode);

        let raw = self
            .index
            .query(&query_vector, limit, flat_filter.as_ref())
            .await?;

        tracing::debug!(query, limit, hits = raw.documents.len(), "similarity search");

        let results = raw
            .documents
            .into_iter()
            .zip(raw.metadatas.iter().map(metadata::decode))
            .zip(raw.distances)
            .map(|((text, meta), score)| SearchResult {
                text,
                metadata: meta,
                score,
            })
            .collect();

        Ok(results)
    }

    /// Collect the distinct non-empty `category` values in the corpus.
    ///
    /// Implemented as an empty-query sweep with a wide limit; set
    /// semantics, no ordering guarantee beyond being deterministic.
    pub async fn list_categories(&self) -> RagResult<Vec<String>> {
        let results = self.search("", CATEGORY_SWEEP_LIMIT, None).await?;

        let categories: BTreeSet<String> = results
            .iter()
            .filter_map(|result| match result.metadata.get("category") {
                Some(MetadataValue::Scalar(value)) if !value.is_empty() => Some(value.clone()),
                _ => None,
            })
            .collect();

        Ok(categories.into_iter().collect())
    }

    /// Return every document stored under `category`.
    pub async fn search_by_category(&self, category: &str) -> RagResult<Vec<SearchResult>> {
        let mut filter = StructuredMetadata::new();
        filter.insert("category".to_string(), MetadataValue::Scalar(category.to_string()));

        self.search("", CATEGORY_SWEEP_LIMIT, Some(&filter)).await
    }
}
