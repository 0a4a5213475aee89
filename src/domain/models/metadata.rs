//! Structured metadata and the flat-encoding codec.
//!
//! The vector store only accepts scalar metadata values (string, number,
//! boolean), while the API boundary works with richer structured metadata
//! where a field may hold an ordered sequence of strings. This module owns
//! the conversion between the two representations.
//!
//! The encoding is deliberately lossy: sequences are joined with `","` on
//! the way in, and any stored string containing a comma is re-split on the
//! way out. A scalar that happens to contain a comma is therefore
//! indistinguishable from an encoded sequence, and a one-element sequence
//! collapses to a scalar on round-trip. Stored systems depend on this exact
//! behavior, so it is preserved rather than fixed here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Separator used to pack sequences into a single stored string.
const SEQUENCE_SEPARATOR: &str = ",";

/// A single structured metadata value: either a plain string or an
/// ordered sequence of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(value: Vec<String>) -> Self {
        Self::Sequence(value)
    }
}

/// A scalar value as persisted inside the vector store.
///
/// The store has no native sequence type; sequences only exist in encoded
/// form inside `Text` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlatValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// Structured metadata as used at the API boundary.
pub type StructuredMetadata = BTreeMap<String, MetadataValue>;

/// Flat metadata as persisted in the vector store.
pub type FlatMetadata = BTreeMap<String, FlatValue>;

/// Encode structured metadata into the flat scalar-only form.
///
/// Sequences are joined with a comma; scalars pass through unchanged.
/// Absent fields are simply not present in the map, so nothing is ever
/// stored as null.
pub fn encode(metadata: &StructuredMetadata) -> FlatMetadata {
    metadata
        .iter()
        .map(|(key, value)| {
            let flat = match value {
                MetadataValue::Scalar(s) => FlatValue::Text(s.clone()),
                MetadataValue::Sequence(items) => {
                    FlatValue::Text(items.join(SEQUENCE_SEPARATOR))
                }
            };
            (key.clone(), flat)
        })
        .collect()
}

/// Decode flat metadata back into structured form.
///
/// Any stored string containing a comma is split into a sequence; other
/// strings stay scalars. Numbers and booleans are accepted by the store
/// but are not surfaced back into structured metadata, matching the
/// behavior the rest of the system was built against.
pub fn decode(flat: &FlatMetadata) -> StructuredMetadata {
    flat.iter()
        .filter_map(|(key, value)| {
            let FlatValue::Text(text) = value else {
                return None;
            };
            let decoded = if text.contains(SEQUENCE_SEPARATOR) {
                MetadataValue::Sequence(
                    text.split(SEQUENCE_SEPARATOR).map(str::to_string).collect(),
                )
            } else {
                MetadataValue::Scalar(text.clone())
            };
            Some((key.clone(), decoded))
        })
        .collect()
}
