//! `grimoire load` — one-shot corpus loader.
//!
//! Reads a character corpus JSON file, flattens each character into an
//! embeddable text plus structured metadata, appends the corpus-summary
//! pseudo-document, and bulk-ingests the lot.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::RagSystem;
use crate::domain::models::{DocumentRecord, MetadataValue, StructuredMetadata};

#[derive(Debug, Deserialize)]
struct Character {
    name: String,
    description: String,
    features: Vec<String>,
    category: String,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    related_characters: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CorpusSummary {
    description: String,
    #[serde(default)]
    key_features: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CorpusFile {
    characters: Vec<Character>,
    metadata: CorpusSummary,
}

pub async fn execute(system: &RagSystem, file: &Path, json: bool) -> Result<()> {
    let records = parse_corpus(file)?;
    let count = records.len();

    let ids = system.ingest_bulk(records).await?;
    tracing::info!(count, "corpus loaded");

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else {
        println!("Loaded {count} documents.");
    }

    Ok(())
}

/// Parse a corpus file into ingestion records.
///
/// Each character becomes one record; the file's corpus-level summary
/// becomes a reserved pseudo-document stored under the `metadata`
/// category with origin `System`.
fn parse_corpus(path: &Path) -> Result<Vec<DocumentRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let corpus: CorpusFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse corpus file {}", path.display()))?;

    let mut records: Vec<DocumentRecord> = corpus
        .characters
        .into_iter()
        .map(|character| {
            let text = format!(
                "{}: {} Features: {}. Category: {}",
                character.name,
                character.description,
                character.features.join(", "),
                character.category,
            );

            let mut metadata = StructuredMetadata::new();
            metadata.insert("name".to_string(), MetadataValue::Scalar(character.name));
            metadata.insert(
                "category".to_string(),
                MetadataValue::Scalar(character.category),
            );
            metadata.insert(
                "features".to_string(),
                MetadataValue::Sequence(character.features),
            );
            metadata.insert(
                "origin".to_string(),
                MetadataValue::Scalar(character.origin.unwrap_or_else(|| "Unknown".to_string())),
            );
            metadata.insert(
                "related_characters".to_string(),
                MetadataValue::Sequence(character.related_characters),
            );

            DocumentRecord::new(text, metadata)
        })
        .collect();

    let mut summary_metadata = StructuredMetadata::new();
    summary_metadata.insert("name".to_string(), MetadataValue::Scalar("metadata".to_string()));
    summary_metadata.insert(
        "category".to_string(),
        MetadataValue::Scalar("metadata".to_string()),
    );
    summary_metadata.insert(
        "features".to_string(),
        MetadataValue::Sequence(corpus.metadata.key_features),
    );
    summary_metadata.insert("origin".to_string(), MetadataValue::Scalar("System".to_string()));
    summary_metadata.insert(
        "related_characters".to_string(),
        MetadataValue::Sequence(Vec::new()),
    );
    records.push(DocumentRecord::new(
        corpus.metadata.description,
        summary_metadata,
    ));

    Ok(records)
}
