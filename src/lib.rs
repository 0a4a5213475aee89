//! Grimoire — retrieval-augmented answering over a fixed knowledge base.
//!
//! Text records are embedded into vectors by an external embedding
//! server, stored in an external vector database together with flattened
//! metadata, and later retrieved by semantic similarity to ground the
//! answers of a generative model.
//!
//! # Architecture
//!
//! - **Domain** (`domain`): models, the metadata codec, the error
//!   taxonomy, and the ports the external services are consumed through.
//! - **Services** (`services`): the ingestion pipeline, the retrieval
//!   engine, and the answer synthesizer.
//! - **Infrastructure** (`infrastructure`): reqwest adapters for the
//!   embedding server, the Chroma-style vector store, and the
//!   Ollama-style generation server, plus configuration loading.
//! - **Application** (`application`): explicit wiring with an
//!   init/teardown lifecycle.
//! - **CLI** (`cli`): the clap command surface.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::RagSystem;
pub use domain::errors::{RagError, RagResult};
pub use domain::models::{
    Answer, Config, DocumentRecord, FlatMetadata, FlatValue, MetadataValue, SearchResult, Source,
    StructuredMetadata,
};
pub use domain::ports::{EmbeddingProvider, GenerationClient, RawQueryResult, VectorIndex};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AnswerSynthesizer, IngestionPipeline, RetrievalEngine, NO_CONTEXT_ANSWER};
