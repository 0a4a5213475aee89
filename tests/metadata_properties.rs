//! Property tests for the metadata codec.
//!
//! The codec round-trips only inside a restricted domain: scalar values
//! without commas, and sequences of at least two comma-free elements.
//! The edges of that domain (comma-bearing scalars, single-element
//! sequences) are deliberately ambiguous and pinned as such.

use std::collections::BTreeMap;

use grimoire::domain::models::metadata::{decode, encode};
use grimoire::{MetadataValue, StructuredMetadata};
use proptest::prelude::*;

/// Field names: non-empty, comma-free identifiers.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,15}"
}

/// Scalar values without commas.
fn comma_free_scalar() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .!?'-]{0,40}"
}

/// Sequence elements without commas (non-empty so that joining and
/// re-splitting cannot produce phantom empties).
fn comma_free_element() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .!?'-]{1,20}"
}

fn scalar_metadata() -> impl Strategy<Value = StructuredMetadata> {
    prop::collection::btree_map(
        key_strategy(),
        comma_free_scalar().prop_map(MetadataValue::Scalar),
        0..6,
    )
}

fn sequence_metadata() -> impl Strategy<Value = StructuredMetadata> {
    prop::collection::btree_map(
        key_strategy(),
        prop::collection::vec(comma_free_element(), 2..5).prop_map(MetadataValue::Sequence),
        0..6,
    )
}

proptest! {
    #[test]
    fn comma_free_scalars_round_trip(metadata in scalar_metadata()) {
        prop_assert_eq!(decode(&encode(&metadata)), metadata);
    }

    #[test]
    fn comma_free_sequences_round_trip(metadata in sequence_metadata()) {
        prop_assert_eq!(decode(&encode(&metadata)), metadata);
    }

    #[test]
    fn encode_preserves_the_key_set(metadata in scalar_metadata()) {
        let flat = encode(&metadata);
        let keys: Vec<_> = metadata.keys().collect();
        let flat_keys: Vec<_> = flat.keys().collect();
        prop_assert_eq!(keys, flat_keys);
    }

    #[test]
    fn scalar_with_comma_always_splits(
        key in key_strategy(),
        left in comma_free_element(),
        right in comma_free_element(),
    ) {
        let mut metadata = BTreeMap::new();
        metadata.insert(key.clone(), MetadataValue::Scalar(format!("{left},{right}")));

        let round_tripped = decode(&encode(&metadata));

        // The pinned ambiguity: a comma-bearing scalar is
        // indistinguishable from an encoded two-element sequence.
        prop_assert_eq!(
            round_tripped.get(&key),
            Some(&MetadataValue::Sequence(vec![left, right]))
        );
    }

    #[test]
    fn single_element_sequences_collapse(
        key in key_strategy(),
        element in comma_free_element(),
    ) {
        let mut metadata = BTreeMap::new();
        metadata.insert(key.clone(), MetadataValue::Sequence(vec![element.clone()]));

        let round_tripped = decode(&encode(&metadata));

        prop_assert_eq!(round_tripped.get(&key), Some(&MetadataValue::Scalar(element)));
    }
}
