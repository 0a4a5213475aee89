//! Bulk ingestion pipeline.
//!
//! Embeds a batch of records concurrently and upserts them into the
//! vector index in one call. Ingestion is all-or-nothing: a single
//! embedding failure aborts the batch before any upsert is issued.

use std::sync::Arc;

use futures::future;
use uuid::Uuid;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{metadata, DocumentRecord, StructuredMetadata};
use crate::domain::ports::{EmbeddingProvider, VectorIndex};

/// Embeds and indexes batches of text+metadata records.
pub struct IngestionPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
}

impl IngestionPipeline {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn VectorIndex>) -> Self {
        Self { embedder, index }
    }

    /// Embed and upsert a batch of records, returning their ids.
    ///
    /// Records without an id get a fresh UUID. All texts are embedded
    /// concurrently; the assembled upsert arrays follow record order
    /// regardless of which embedding call finishes first. If any single
    /// embedding fails the whole batch fails and no upsert happens —
    /// there is no partial-commit mode.
    pub async fn add_bulk(&self, records: Vec<DocumentRecord>) -> RagResult<Vec<String>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        // try_join_all keeps results index-aligned with the input.
        let embeddings = future::try_join_all(
            records.iter().map(|record| self.embedder.embed(&record.text)),
        )
        .await
        .map_err(|err| {
            tracing::error!(error = %err, batch_size = records.len(), "bulk embedding failed");
            RagError::BulkIngestion(Box::new(err))
        })?;

        let ids: Vec<String> = records
            .iter()
            .map(|record| {
                record
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string())
            })
            .collect();
        let metadatas: Vec<_> = records
            .iter()
            .map(|record| metadata::encode(&record.metadata))
            .collect();
        let texts: Vec<String> = records.into_iter().map(|record| record.text).collect();

        self.index
            .upsert(&ids, &embeddings, &metadatas, &texts)
            .await?;

        tracing::info!(count = ids.len(), "indexed document batch");
        Ok(ids)
    }

    /// Embed and upsert a single document, returning its id.
    pub async fn add_document(
        &self,
        text: impl Into<String>,
        meta: StructuredMetadata,
        id: Option<String>,
    ) -> RagResult<String> {
        let text = text.into();
        let document_id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let embedding = self.embedder.embed(&text).await?;
        let flat = metadata::encode(&meta);

        self.index
            .upsert(
                std::slice::from_ref(&document_id),
                std::slice::from_ref(&embedding),
                std::slice::from_ref(&flat),
                std::slice::from_ref(&text),
            )
            .await?;

        tracing::debug!(id = %document_id, "indexed document");
        Ok(document_id)
    }
}
