//! Generation server adapter.

pub mod client;

pub use client::OllamaClient;
