//! Pipeline services: ingestion, retrieval, and answer synthesis.

pub mod answer;
pub mod ingestion;
pub mod retrieval;

pub use answer::{AnswerSynthesizer, NO_CONTEXT_ANSWER};
pub use ingestion::IngestionPipeline;
pub use retrieval::{RetrievalEngine, DEFAULT_SEARCH_LIMIT};
