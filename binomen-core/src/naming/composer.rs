use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::error::NamingError;
use crate::naming::compose_input::{ComposeInput, FirstPool, Structure};
use crate::naming::fragment::Fragment;
use crate::naming::fragment_table::{FragmentRole, FragmentTable};

/// A fully composed species-name section.
///
/// Value object holding the 2-3 chosen fragments in order plus the joined,
/// capitalized text. It owns its data independently of the table that
/// produced it.
///
/// Serializable so callers can hand names to display or persistence
/// layers; deserialization is not supported, names only come from a
/// composer.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ComposedName {
	fragments: Vec<Fragment>,
	text: String,
}

impl ComposedName {
	/// Joins the fragments with no separator and applies the single
	/// capitalization pass on the first character.
	fn new(fragments: Vec<Fragment>) -> Self {
		let joined: String = fragments.iter().map(Fragment::text).collect();
		Self {
			text: capitalize(&joined),
			fragments,
		}
	}

	/// The joined, capitalized name text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The fragments the name was assembled from, in order.
	pub fn fragments(&self) -> &[Fragment] {
		&self.fragments
	}

	/// Consumes the name, returning the joined text.
	pub fn into_text(self) -> String {
		self.text
	}
}

impl fmt::Display for ComposedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.text)
	}
}

/// A binomial species name: a genus section plus an epithet section.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BinomialName {
	genus: ComposedName,
	epithet: ComposedName,
}

impl BinomialName {
	/// The genus section.
	pub fn genus(&self) -> &ComposedName {
		&self.genus
	}

	/// The epithet section.
	pub fn epithet(&self) -> &ComposedName {
		&self.epithet
	}

	/// Formats the full binomial as `"Genus epithet"`, with the epithet
	/// lowercased per binomial convention.
	pub fn text(&self) -> String {
		format!("{} {}", self.genus.text(), self.epithet.text().to_lowercase())
	}
}

impl fmt::Display for BinomialName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.text())
	}
}

/// Composes species names from a `FragmentTable`.
///
/// # Responsibilities
/// - Decide the structure (2 or 3 fragments) per call
/// - Enforce the phonotactic rule: the leading facet of every fragment
///   after the first is the opposite of the previous trailing facet
/// - Fail explicitly when the required bucket is empty
///
/// Each call is a one-shot pure function of (table, random source, input).
/// The composer holds no mutable state, so one instance may serve many
/// threads as long as each caller brings its own `Rng`; the same seed over
/// the same table reproduces the same name.
pub struct NameComposer<'a> {
	table: &'a FragmentTable,
}

impl<'a> NameComposer<'a> {
	/// Creates a composer reading from the given table.
	pub fn new(table: &'a FragmentTable) -> Self {
		Self { table }
	}

	/// Composes one name section.
	///
	/// # Behavior
	/// - Decides 2 or 3 fragments from `input.structure` (a `Random`
	///   structure draws against the input's cofix probability).
	/// - Picks the opening fragment uniformly from the configured first
	///   pool, with no facet preference.
	/// - Picks each following fragment from the bucket whose leading facet
	///   is the opposite of the previous fragment's trailing facet, ending
	///   on the matching suffix bucket.
	/// - Joins the fragments and capitalizes the first character.
	///
	/// # Errors
	/// Returns `NamingError::EmptyBucket` naming the missing bucket if any
	/// required pool is empty. No partial name is ever returned; the caller
	/// may retry with a relaxed structure or another seed.
	pub fn compose<R: Rng>(&self, input: &ComposeInput, rng: &mut R) -> Result<ComposedName, NamingError> {
		let with_cofix = match input.structure {
			Structure::Two => false,
			Structure::Three => true,
			Structure::Random => rng.random_bool(input.cofix_probability() as f64),
		};

		let first_role = match input.first_pool {
			FirstPool::PrefixOrCofix => FragmentRole::PrefixOrCofix,
			FirstPool::PrefixOnly => FragmentRole::Prefix,
		};

		let mut fragments: Vec<Fragment> = Vec::with_capacity(if with_cofix { 3 } else { 2 });
		fragments.push(self.pick(first_role, rng)?.clone());

		if with_cofix {
			// Should not panic, the opening fragment was just pushed
			let role = cofix_role_after(fragments.last().unwrap());
			fragments.push(self.pick(role, rng)?.clone());
		}

		let role = suffix_role_after(fragments.last().unwrap());
		fragments.push(self.pick(role, rng)?.clone());

		Ok(ComposedName::new(fragments))
	}

	/// Composes a binomial name: a genus section, then an epithet section,
	/// drawn consecutively from the same random source.
	///
	/// # Errors
	/// Same failure mode as `compose`; either both sections succeed or the
	/// whole binomial fails.
	pub fn compose_binomial<R: Rng>(&self, input: &ComposeInput, rng: &mut R) -> Result<BinomialName, NamingError> {
		let genus = self.compose(input, rng)?;
		let epithet = self.compose(input, rng)?;
		Ok(BinomialName { genus, epithet })
	}

	/// Uniform pick from the bucket stored for `role`.
	fn pick(&self, role: FragmentRole, rng: &mut impl Rng) -> Result<&Fragment, NamingError> {
		self.table
			.by_role(role)
			.choose(rng)
			.ok_or(NamingError::EmptyBucket { role })
	}
}

/// Cofix bucket whose leading facet is the opposite of the previous
/// fragment's trailing facet.
fn cofix_role_after(previous: &Fragment) -> FragmentRole {
	if previous.ends_with_vowel() {
		FragmentRole::ConsonantCofix
	} else {
		FragmentRole::VowelCofix
	}
}

/// Suffix bucket whose leading facet is the opposite of the previous
/// fragment's trailing facet.
fn suffix_role_after(previous: &Fragment) -> FragmentRole {
	if previous.ends_with_vowel() {
		FragmentRole::ConsonantSuffix
	} else {
		FragmentRole::VowelSuffix
	}
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
