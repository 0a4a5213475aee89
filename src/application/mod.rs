//! Application wiring: explicit construction and lifecycle of the
//! answering system.
//!
//! All components are built here and handed their dependencies at
//! construction time — there are no module-level singletons. Init runs
//! the embedding-server health check and attaches to the vector
//! collection; a failure of either is fatal to startup.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client as ReqwestClient;

use crate::domain::errors::RagResult;
use crate::domain::models::{Answer, Config, DocumentRecord, SearchResult, StructuredMetadata};
use crate::domain::ports::{EmbeddingProvider, GenerationClient, VectorIndex};
use crate::infrastructure::chroma::ChromaVectorStore;
use crate::infrastructure::embedding::HttpEmbeddingClient;
use crate::infrastructure::ollama::OllamaClient;
use crate::services::{AnswerSynthesizer, IngestionPipeline, RetrievalEngine};

/// The assembled answering system.
///
/// One instance is shared by all requests; it holds only stateless
/// client handles, so no locking is needed.
pub struct RagSystem {
    ingestion: IngestionPipeline,
    retrieval: Arc<RetrievalEngine>,
    synthesizer: AnswerSynthesizer,
}

impl RagSystem {
    /// Build the full pipeline against the configured external services.
    pub async fn init(config: &Config) -> Result<Self> {
        let http = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .build()
            .context("Failed to build HTTP client")?;

        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(HttpEmbeddingClient::new(
            http.clone(),
            config.embedding.base_url.clone(),
        ));

        embedder
            .health_check()
            .await
            .context("Embedding server health check failed")?;
        tracing::info!(url = %config.embedding.base_url, "embedding server is healthy");

        let index: Arc<dyn VectorIndex> = Arc::new(
            ChromaVectorStore::connect(
                http.clone(),
                config.vector_store.base_url.clone(),
                &config.vector_store.collection,
            )
            .await
            .context("Failed to attach to vector store collection")?,
        );

        let generator: Arc<dyn GenerationClient> = Arc::new(OllamaClient::new(
            http,
            config.generation.base_url.clone(),
            config.generation.model.clone(),
        ));

        Ok(Self::assemble(embedder, index, generator))
    }

    /// Wire the pipeline from already-constructed dependencies.
    ///
    /// This is the seam tests use to inject doubles.
    pub fn assemble(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        generator: Arc<dyn GenerationClient>,
    ) -> Self {
        let retrieval = Arc::new(RetrievalEngine::new(embedder.clone(), index.clone()));
        Self {
            ingestion: IngestionPipeline::new(embedder, index),
            synthesizer: AnswerSynthesizer::new(retrieval.clone(), generator),
            retrieval,
        }
    }

    /// Answer a question grounded in retrieved context.
    pub async fn ask(&self, question: &str) -> RagResult<Answer> {
        self.synthesizer.ask(question).await
    }

    /// Similarity search over the corpus.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        filter: Option<&StructuredMetadata>,
    ) -> RagResult<Vec<SearchResult>> {
        self.retrieval.search(query, limit, filter).await
    }

    /// Distinct categories present in the corpus.
    pub async fn list_categories(&self) -> RagResult<Vec<String>> {
        self.retrieval.list_categories().await
    }

    /// Every document stored under `category`.
    pub async fn search_by_category(&self, category: &str) -> RagResult<Vec<SearchResult>> {
        self.retrieval.search_by_category(category).await
    }

    /// Embed and index a batch of records.
    pub async fn ingest_bulk(&self, records: Vec<DocumentRecord>) -> RagResult<Vec<String>> {
        self.ingestion.add_bulk(records).await
    }

    /// Embed and index a single document.
    pub async fn add_document(
        &self,
        text: impl Into<String>,
        metadata: StructuredMetadata,
        id: Option<String>,
    ) -> RagResult<String> {
        self.ingestion.add_document(text, metadata, id).await
    }

    /// Tear the system down.
    ///
    /// The HTTP clients close their pooled connections on drop; this
    /// exists to make the lifecycle explicit at call sites.
    pub fn shutdown(self) {
        tracing::debug!("shutting down answering system");
        drop(self);
    }
}
