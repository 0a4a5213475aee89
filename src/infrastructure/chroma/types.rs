//! Wire types for the Chroma HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::models::FlatMetadata;

#[derive(Debug, Serialize)]
pub struct CreateCollectionRequest<'a> {
    pub name: &'a str,
    pub get_or_create: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct AddRequest<'a> {
    pub ids: &'a [String],
    pub embeddings: &'a [Vec<f32>],
    pub metadatas: &'a [FlatMetadata],
    pub documents: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query_embeddings: Vec<&'a [f32]>,
    pub n_results: usize,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a FlatMetadata>,
    pub include: &'a [&'a str],
}

/// Query response; Chroma nests one result row per query embedding.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub documents: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub metadatas: Option<Vec<Vec<FlatMetadata>>>,
    #[serde(default)]
    pub distances: Option<Vec<Vec<f32>>>,
}
