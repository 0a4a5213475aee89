//! Vector index adapter over the Chroma HTTP API.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::json;

use super::types::{
    AddRequest, CollectionResponse, CreateCollectionRequest, QueryRequest, QueryResponse,
};
use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::FlatMetadata;
use crate::domain::ports::{RawQueryResult, VectorIndex};

/// Collection-scoped handle to a Chroma server.
///
/// Constructed through [`ChromaVectorStore::connect`], which resolves
/// (or creates) the collection once; every later call is scoped to that
/// collection id. The store's ranking is forwarded verbatim — this
/// adapter never reorders or rescores results.
#[derive(Debug)]
pub struct ChromaVectorStore {
    http: ReqwestClient,
    base_url: String,
    collection_id: String,
}

impl ChromaVectorStore {
    /// Connect to the store and get-or-create the named collection.
    pub async fn connect(
        http: ReqwestClient,
        base_url: impl Into<String>,
        collection: &str,
    ) -> RagResult<Self> {
        let base_url = base_url.into();

        let request = CreateCollectionRequest {
            name: collection,
            get_or_create: true,
            metadata: Some(json!({ "description": "grimoire knowledge base" })),
        };

        let response = http
            .post(format!("{base_url}/api/v1/collections"))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "vector store unreachable");
                RagError::VectorStore(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, collection, "collection setup failed");
            return Err(RagError::VectorStore(format!(
                "collection setup returned {status}"
            )));
        }

        let body: CollectionResponse = response
            .json()
            .await
            .map_err(|err| RagError::VectorStore(err.to_string()))?;

        tracing::info!(collection, id = %body.id, "attached to vector collection");

        Ok(Self {
            http,
            base_url,
            collection_id: body.id,
        })
    }

    async fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> RagResult<reqwest::Response> {
        let response = self
            .http
            .post(format!(
                "{}/api/v1/collections/{}/{path}",
                self.base_url, self.collection_id
            ))
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, path, "vector store request failed");
                RagError::VectorStore(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, path, "vector store returned an error");
            return Err(RagError::VectorStore(format!(
                "vector store returned {status}"
            )));
        }

        Ok(response)
    }
}

fn first_row<T>(rows: Option<Vec<Vec<T>>>) -> Vec<T> {
    rows.and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .unwrap_or_default()
}

#[async_trait]
impl VectorIndex for ChromaVectorStore {
    async fn upsert(
        &self,
        ids: &[String],
        vectors: &[Vec<f32>],
        metadatas: &[FlatMetadata],
        texts: &[String],
    ) -> RagResult<()> {
        if ids.len() != vectors.len() || ids.len() != metadatas.len() || ids.len() != texts.len() {
            return Err(RagError::InvalidBatch {
                ids: ids.len(),
                vectors: vectors.len(),
                metadatas: metadatas.len(),
                texts: texts.len(),
            });
        }

        let request = AddRequest {
            ids,
            embeddings: vectors,
            metadatas,
            documents: texts,
        };

        self.post_json("add", &request).await?;
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        limit: usize,
        filter: Option<&FlatMetadata>,
    ) -> RagResult<RawQueryResult> {
        if limit == 0 {
            return Err(RagError::Validation(
                "query limit must be at least 1".to_string(),
            ));
        }

        let request = QueryRequest {
            query_embeddings: vec![vector],
            n_results: limit,
            filter,
            include: &["documents", "metadatas", "distances"],
        };

        let response = self.post_json("query", &request).await?;

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|err| RagError::VectorStore(err.to_string()))?;

        // One query embedding in, so only the first result row matters.
        Ok(RawQueryResult {
            documents: first_row(body.documents),
            metadatas: first_row(body.metadatas),
            distances: first_row(body.distances),
        })
    }
}
