//! Domain models for the answering pipeline.

pub mod config;
pub mod document;
pub mod metadata;

pub use config::{Config, EmbeddingConfig, GenerationConfig, LoggingConfig, VectorStoreConfig};
pub use document::{Answer, DocumentRecord, SearchResult, Source};
pub use metadata::{FlatMetadata, FlatValue, MetadataValue, StructuredMetadata};
