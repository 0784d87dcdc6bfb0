use serde::Serialize;

use crate::error::NamingError;

/// Letters treated as vowels when deriving fragment facets.
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// A single classified building block of a species name.
///
/// A `Fragment` is an immutable text token tagged with two facets derived
/// once at classification time: whether its first letter is a vowel and
/// whether its last letter is a vowel. The facets drive the composer's
/// single phonotactic rule (vowel/consonant alternation at fragment joins).
///
/// # Invariants
/// - `text` is non-empty and contains letters only
/// - Facets always match `text`; fragments are never mutated after
///   classification, and deserialization is deliberately not supported
///   so facets cannot be injected out of sync with the token
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
	/// The token itself, casing preserved as supplied.
	text: String,
	/// Whether the first letter is in the fixed vowel set (a, e, i, o, u).
	starts_with_vowel: bool,
	/// Whether the last letter is in the fixed vowel set.
	ends_with_vowel: bool,
}

impl Fragment {
	/// Classifies a raw corpus token into a `Fragment`.
	///
	/// Derives both facets from the first and last letter of the token.
	/// The vowel test is case-insensitive.
	///
	/// # Errors
	/// Returns `NamingError::InvalidFragment` if the token is empty or
	/// contains any non-letter character (digits, whitespace, punctuation).
	pub fn classify(token: &str) -> Result<Self, NamingError> {
		if token.is_empty() {
			return Err(NamingError::InvalidFragment {
				token: token.to_owned(),
				reason: "token is empty",
			});
		}

		if !token.chars().all(char::is_alphabetic) {
			return Err(NamingError::InvalidFragment {
				token: token.to_owned(),
				reason: "token must contain letters only",
			});
		}

		// Should not panic, the token is non-empty
		let first = token.chars().next().unwrap();
		let last = token.chars().next_back().unwrap();

		Ok(Self {
			text: token.to_owned(),
			starts_with_vowel: is_vowel(first),
			ends_with_vowel: is_vowel(last),
		})
	}

	/// Returns the fragment text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Whether the fragment starts with a vowel.
	pub fn starts_with_vowel(&self) -> bool {
		self.starts_with_vowel
	}

	/// Whether the fragment ends with a vowel.
	pub fn ends_with_vowel(&self) -> bool {
		self.ends_with_vowel
	}
}

/// Case-insensitive membership test against the fixed vowel set.
fn is_vowel(c: char) -> bool {
	c.to_lowercase().any(|lower| VOWELS.contains(&lower))
}
