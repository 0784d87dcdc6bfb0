//! Species-name generation library.
//!
//! This crate provides a fragment-based binomial name generator including:
//! - Phonotactic classification of name fragments (vowel/consonant facets)
//! - Categorized fragment tables built from flat corpus records
//! - Name composition with alternating vowel/consonant fragment joins
//! - Binomial assembly (genus and epithet sections)
//!
//! The fragment table is populated once at construction and read-only
//! afterwards, so it may be shared freely across threads. Composition is a
//! pure function of (table, random source, input); the random source is
//! caller-supplied, which makes seeded runs reproducible.

/// Error kinds for corpus loading, table construction and composition.
pub mod error;

/// Core naming types and composition logic.
pub mod naming;
