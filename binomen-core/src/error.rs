use thiserror::Error;

use crate::naming::fragment_table::FragmentRole;

/// Errors produced while loading corpora, building fragment tables and
/// composing names.
///
/// # Variants
/// - `InvalidFragment`: a corpus token failed classification. Local to
///   ingestion; loading of that corpus is aborted.
/// - `EmptyCategory`: a source category was empty after loading. Fatal to
///   table construction, since composition would be impossible.
/// - `EmptyBucket`: the bucket required by the chosen structure held no
///   fragment at composition time. Recoverable; the caller may retry with
///   a different structure or seed.
/// - `InvalidProbability`: a probability parameter was outside [0.0, 1.0].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NamingError {
	#[error("invalid fragment {token:?}: {reason}")]
	InvalidFragment { token: String, reason: &'static str },

	#[error("corpus category '{category}' is empty")]
	EmptyCategory { category: &'static str },

	#[error("no fragment available in the {role} bucket")]
	EmptyBucket { role: FragmentRole },

	#[error("probability must be between 0.0 and 1.0, got {value}")]
	InvalidProbability { value: f32 },
}
