//! Infrastructure layer: HTTP adapters for the external services and
//! configuration loading.

pub mod chroma;
pub mod config;
pub mod embedding;
pub mod ollama;
