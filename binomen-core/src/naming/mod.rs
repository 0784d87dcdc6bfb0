//! Top-level module for the species-name generation system.
//!
//! This module provides a fragment-based species-name generator, including:
//! - Classified name fragments (`Fragment`)
//! - Categorized fragment pools (`FragmentTable`)
//! - Corpus records and the built-in corpus (`NameCorpus`)
//! - Composition configuration (`ComposeInput`)
//! - A high-level composition interface (`NameComposer`)

/// High-level interface for composing species names from a fragment table.
///
/// Exposes single-section and binomial composition with caller-supplied
/// random sources for reproducible generation.
pub mod composer;

/// Composition configuration structure.
///
/// Stores generation parameters such as structure policy, first-fragment
/// pool and cofix probability. Consumed by `NameComposer`.
pub mod compose_input;

/// Name corpus record and the built-in fragment corpus.
///
/// The record form is what external configuration layers supply; the
/// built-in corpus is a deterministic, versioned default.
pub mod corpus;

/// A single classified name fragment.
///
/// Handles token validation and vowel/consonant facet derivation.
pub mod fragment;

/// Categorized fragment pools built from a corpus.
///
/// Partitions fragments into vowel-leading/consonant-leading buckets and
/// exposes read-only views per role.
pub mod fragment_table;
