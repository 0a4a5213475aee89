//! Domain layer: models, metadata codec, errors, and service ports.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{RagError, RagResult};
