//! Embedding server adapter.

pub mod client;

pub use client::HttpEmbeddingClient;
