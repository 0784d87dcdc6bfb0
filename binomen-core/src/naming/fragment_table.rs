use std::fmt;

use crate::error::NamingError;
use crate::naming::corpus::NameCorpus;
use crate::naming::fragment::Fragment;

/// Identifies one of the fragment pools exposed by `FragmentTable`.
///
/// # Variants
/// - `Prefix` / `Suffix`: a whole source category, in corpus order,
///   regardless of leading facet.
/// - `Vowel*` / `Consonant*`: the partition of a category by the leading
///   facet of its fragments.
/// - `PrefixOrCofix`: the union of all prefixes and cofixes, used when a
///   caller wants either role interchangeably for the opening fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentRole {
	Prefix,
	VowelPrefix,
	ConsonantPrefix,
	VowelCofix,
	ConsonantCofix,
	Suffix,
	VowelSuffix,
	ConsonantSuffix,
	PrefixOrCofix,
}

impl fmt::Display for FragmentRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			FragmentRole::Prefix => "prefix",
			FragmentRole::VowelPrefix => "vowel-leading prefix",
			FragmentRole::ConsonantPrefix => "consonant-leading prefix",
			FragmentRole::VowelCofix => "vowel-leading cofix",
			FragmentRole::ConsonantCofix => "consonant-leading cofix",
			FragmentRole::Suffix => "suffix",
			FragmentRole::VowelSuffix => "vowel-leading suffix",
			FragmentRole::ConsonantSuffix => "consonant-leading suffix",
			FragmentRole::PrefixOrCofix => "prefix-or-cofix",
		};
		write!(f, "{}", label)
	}
}

/// Categorized fragment pools for name composition.
///
/// # Responsibilities
/// - Classify flat corpus lists into fragments
/// - Partition each category into vowel-leading/consonant-leading buckets
/// - Expose read-only views per `FragmentRole`
///
/// # Invariants
/// - Every fragment in a vowel/consonant bucket satisfies that facet
/// - Buckets are derived in a single pass at construction and the table is
///   never mutated afterwards, so partitions cannot drift from the sources
/// - All three source categories (prefixes, cofixes, suffixes) are non-empty
///
/// A constructed table is read-only and may be shared across threads;
/// publish it before spawning readers and no locking is needed.
#[derive(Clone, Debug)]
pub struct FragmentTable {
	/// All prefixes, in corpus order.
	prefixes: Vec<Fragment>,
	vowel_prefixes: Vec<Fragment>,
	consonant_prefixes: Vec<Fragment>,
	vowel_cofixes: Vec<Fragment>,
	consonant_cofixes: Vec<Fragment>,
	/// All suffixes, in corpus order.
	suffixes: Vec<Fragment>,
	vowel_suffixes: Vec<Fragment>,
	consonant_suffixes: Vec<Fragment>,
	/// Union of every prefix and cofix, prefixes first, in corpus order.
	prefix_cofix_pool: Vec<Fragment>,
}

impl FragmentTable {
	/// Builds a table from a flat corpus record.
	///
	/// Every token is classified with `Fragment::classify`, then each
	/// category is partitioned by leading facet and the combined
	/// prefix-or-cofix pool is derived.
	///
	/// # Errors
	/// - `NamingError::InvalidFragment` if any token is empty or contains
	///   a non-letter character. Loading aborts on the first bad entry,
	///   nothing is silently dropped.
	/// - `NamingError::EmptyCategory` if prefixes, cofixes or suffixes end
	///   up empty, since composition would be impossible. Emptiness of a
	///   single vowel/consonant bucket is not a construction error; it
	///   surfaces at composition time instead.
	pub fn from_corpus(corpus: &NameCorpus) -> Result<Self, NamingError> {
		let prefixes = classify_all(&corpus.prefixes)?;
		let cofixes = classify_all(&corpus.cofixes)?;
		let suffixes = classify_all(&corpus.suffixes)?;

		if prefixes.is_empty() {
			return Err(NamingError::EmptyCategory { category: "prefixes" });
		}
		if cofixes.is_empty() {
			return Err(NamingError::EmptyCategory { category: "cofixes" });
		}
		if suffixes.is_empty() {
			return Err(NamingError::EmptyCategory { category: "suffixes" });
		}

		let (vowel_prefixes, consonant_prefixes) = split_by_leading(&prefixes);
		let (vowel_cofixes, consonant_cofixes) = split_by_leading(&cofixes);
		let (vowel_suffixes, consonant_suffixes) = split_by_leading(&suffixes);

		let mut prefix_cofix_pool = prefixes.clone();
		prefix_cofix_pool.extend(cofixes);

		Ok(Self {
			prefixes,
			vowel_prefixes,
			consonant_prefixes,
			vowel_cofixes,
			consonant_cofixes,
			suffixes,
			vowel_suffixes,
			consonant_suffixes,
			prefix_cofix_pool,
		})
	}

	/// Builds a table over the built-in corpus.
	pub fn builtin() -> Self {
		// Impossible to panic, the built-in corpus is known-good
		Self::from_corpus(&NameCorpus::default()).unwrap()
	}

	/// Returns the fragments stored for a role.
	///
	/// The returned slice is a read-only view in stored order; callers
	/// cannot mutate the table through it.
	pub fn by_role(&self, role: FragmentRole) -> &[Fragment] {
		match role {
			FragmentRole::Prefix => &self.prefixes,
			FragmentRole::VowelPrefix => &self.vowel_prefixes,
			FragmentRole::ConsonantPrefix => &self.consonant_prefixes,
			FragmentRole::VowelCofix => &self.vowel_cofixes,
			FragmentRole::ConsonantCofix => &self.consonant_cofixes,
			FragmentRole::Suffix => &self.suffixes,
			FragmentRole::VowelSuffix => &self.vowel_suffixes,
			FragmentRole::ConsonantSuffix => &self.consonant_suffixes,
			FragmentRole::PrefixOrCofix => &self.prefix_cofix_pool,
		}
	}

	/// Prefixes starting with a vowel.
	pub fn vowel_prefixes(&self) -> &[Fragment] {
		&self.vowel_prefixes
	}

	/// Prefixes starting with a consonant.
	pub fn consonant_prefixes(&self) -> &[Fragment] {
		&self.consonant_prefixes
	}

	/// Cofixes starting with a vowel.
	pub fn vowel_cofixes(&self) -> &[Fragment] {
		&self.vowel_cofixes
	}

	/// Cofixes starting with a consonant.
	pub fn consonant_cofixes(&self) -> &[Fragment] {
		&self.consonant_cofixes
	}

	/// All suffixes, regardless of leading facet.
	pub fn suffixes(&self) -> &[Fragment] {
		&self.suffixes
	}

	/// Suffixes starting with a vowel.
	pub fn vowel_suffixes(&self) -> &[Fragment] {
		&self.vowel_suffixes
	}

	/// Suffixes starting with a consonant.
	pub fn consonant_suffixes(&self) -> &[Fragment] {
		&self.consonant_suffixes
	}

	/// The combined prefix-or-cofix pool.
	pub fn prefix_cofix_pool(&self) -> &[Fragment] {
		&self.prefix_cofix_pool
	}
}

/// Classifies a whole token list, failing on the first invalid entry.
fn classify_all(tokens: &[String]) -> Result<Vec<Fragment>, NamingError> {
	tokens.iter().map(|token| Fragment::classify(token)).collect()
}

/// Partitions fragments by their leading facet (vowels first tuple slot).
fn split_by_leading(fragments: &[Fragment]) -> (Vec<Fragment>, Vec<Fragment>) {
	let mut vowels = Vec::new();
	let mut consonants = Vec::new();
	for fragment in fragments {
		if fragment.starts_with_vowel() {
			vowels.push(fragment.clone());
		} else {
			consonants.push(fragment.clone());
		}
	}
	(vowels, consonants)
}
