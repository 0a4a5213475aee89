//! Ports (traits) for the external services the pipeline depends on.

pub mod embedding;
pub mod generation;
pub mod vector_index;

pub use embedding::EmbeddingProvider;
pub use generation::GenerationClient;
pub use vector_index::{RawQueryResult, VectorIndex};
