//! Chroma vector store adapter.

pub mod client;
pub mod types;

pub use client::ChromaVectorStore;
