//! Document and search-result models.

use serde::{Deserialize, Serialize};

use super::metadata::StructuredMetadata;

/// A unit of knowledge submitted for indexing.
///
/// The id is optional on input; the ingestion pipeline generates a fresh
/// UUID for records that arrive without one. Once stored, a document's
/// text is immutable: updates are modeled as upserts of new documents,
/// never in-place mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Opaque unique identifier within the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Raw content to embed; returned verbatim as retrieval context.
    pub text: String,

    /// Structured metadata attached to the document.
    #[serde(default)]
    pub metadata: StructuredMetadata,
}

impl DocumentRecord {
    pub fn new(text: impl Into<String>, metadata: StructuredMetadata) -> Self {
        Self {
            id: None,
            text: text.into(),
            metadata,
        }
    }
}

/// One decoded match from a similarity query.
///
/// The score is the store's native distance, preserved as-is (the store's
/// own convention decides whether lower or higher means closer). Result
/// order is the store's ranking and is authoritative.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub text: String,
    pub metadata: StructuredMetadata,
    pub score: f32,
}

/// A retrieved document attributed as a source of an answer.
#[derive(Debug, Clone, Serialize)]
pub struct Source {
    pub content: String,
    pub metadata: StructuredMetadata,
}

/// The final product of the answering pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub answer: String,
    pub sources: Vec<Source>,
}
