//! Test doubles for the pipeline ports.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use grimoire::{
    EmbeddingProvider, FlatMetadata, GenerationClient, RagError, RagResult, RawQueryResult,
    VectorIndex,
};

pub const STUB_DIMENSION: usize = 8;

/// Deterministic stand-in for the embedding model: same text, same vector.
pub fn stub_vector(text: &str) -> Vec<f32> {
    let bytes = text.as_bytes();
    (0..STUB_DIMENSION)
        .map(|i| {
            let byte = if bytes.is_empty() {
                0
            } else {
                bytes[i % bytes.len()]
            };
            f32::from(byte).mul_add(0.01, i as f32)
        })
        .collect()
}

/// Embedding double that records every call and can be told to fail on
/// one specific text.
pub struct StubEmbedder {
    pub calls: Mutex<Vec<String>>,
    pub fail_on_text: Option<String>,
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_text: None,
        }
    }

    pub fn failing_on(text: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_text: Some(text.into()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        self.calls.lock().unwrap().push(text.to_string());

        if self.fail_on_text.as_deref() == Some(text) {
            return Err(RagError::EmbeddingService(
                "stubbed embedding failure".to_string(),
            ));
        }

        Ok(stub_vector(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> RagResult<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    async fn health_check(&self) -> RagResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UpsertCall {
    pub ids: Vec<String>,
    pub vectors: Vec<Vec<f32>>,
    pub metadatas: Vec<FlatMetadata>,
    pub texts: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct QueryCall {
    pub vector: Vec<f32>,
    pub limit: usize,
    pub filter: Option<FlatMetadata>,
}

/// Vector index double: records upserts and queries, answers queries
/// from a canned result truncated to the requested limit.
pub struct RecordingIndex {
    pub upserts: Mutex<Vec<UpsertCall>>,
    pub queries: Mutex<Vec<QueryCall>>,
    pub canned: Mutex<RawQueryResult>,
}

impl Default for RecordingIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingIndex {
    pub fn new() -> Self {
        Self {
            upserts: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            canned: Mutex::new(RawQueryResult::default()),
        }
    }

    pub fn with_canned(canned: RawQueryResult) -> Self {
        Self {
            upserts: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            canned: Mutex::new(canned),
        }
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.lock().unwrap().len()
    }
}

#[async_trait]
impl VectorIndex for RecordingIndex {
    async fn upsert(
        &self,
        ids: &[String],
        vectors: &[Vec<f32>],
        metadatas: &[FlatMetadata],
        texts: &[String],
    ) -> RagResult<()> {
        self.upserts.lock().unwrap().push(UpsertCall {
            ids: ids.to_vec(),
            vectors: vectors.to_vec(),
            metadatas: metadatas.to_vec(),
            texts: texts.to_vec(),
        });
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        limit: usize,
        filter: Option<&FlatMetadata>,
    ) -> RagResult<RawQueryResult> {
        self.queries.lock().unwrap().push(QueryCall {
            vector: vector.to_vec(),
            limit,
            filter: filter.cloned(),
        });

        let canned = self.canned.lock().unwrap();
        let take = limit.min(canned.documents.len());
        Ok(RawQueryResult {
            documents: canned.documents[..take].to_vec(),
            metadatas: canned.metadatas[..take].to_vec(),
            distances: canned.distances[..take].to_vec(),
        })
    }
}

/// Generation double: replies with a fixed answer and records every
/// prompt it receives.
pub struct ScriptedGenerator {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
    pub fail: bool,
}

impl ScriptedGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> RagResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(RagError::GenerationService(
                "stubbed generation failure".to_string(),
            ));
        }

        Ok(self.reply.clone())
    }
}
