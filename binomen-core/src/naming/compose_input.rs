use crate::error::NamingError;

/// Structure of a composed name: how many fragments it contains.
///
/// # Variants
/// - `Two`: prefix + suffix.
/// - `Three`: prefix + cofix + suffix.
/// - `Random`: decided per call using the input's cofix probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Structure {
	Two,
	Three,
	Random,
}

/// Pool the opening fragment is drawn from.
///
/// # Variants
/// - `PrefixOrCofix`: the combined pool; prefixes and cofixes are
///   interchangeable in the opening position.
/// - `PrefixOnly`: the dedicated prefix pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPool {
	PrefixOrCofix,
	PrefixOnly,
}

/// Input parameters for composing names.
///
/// `ComposeInput` contains the structure policy, the pool choice for the
/// opening fragment and the probability used when the structure is decided
/// per call.
///
/// # Invariants
/// - `cofix_probability` is always within [0.0, 1.0]
#[derive(Clone, Debug)]
pub struct ComposeInput {
	/// Number of fragments in the composed name.
	pub structure: Structure,

	/// Pool the opening fragment is drawn from.
	pub first_pool: FirstPool,

	/// Probability of a 3-fragment structure when `structure` is `Random`.
	cofix_probability: f32,
}

impl Default for ComposeInput {
	/// Random structure with equal chance, opening fragment from the
	/// combined prefix-or-cofix pool.
	fn default() -> Self {
		Self {
			structure: Structure::Random,
			first_pool: FirstPool::PrefixOrCofix,
			cofix_probability: 0.5,
		}
	}
}

impl ComposeInput {
	/// Returns the current cofix probability.
	pub fn cofix_probability(&self) -> f32 {
		self.cofix_probability
	}

	/// Sets the cofix probability (0.0..1.0).
	///
	/// Only relevant when `structure` is `Structure::Random`: 0.0 always
	/// composes 2 fragments, 1.0 always composes 3.
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_cofix_probability(&mut self, probability: f32) -> Result<(), NamingError> {
		if !(0.0..=1.0).contains(&probability) {
			return Err(NamingError::InvalidProbability { value: probability });
		}
		self.cofix_probability = probability;
		Ok(())
	}
}
