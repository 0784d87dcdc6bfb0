use serde::{Deserialize, Serialize};

/// Version of the built-in corpus. Bumped whenever the default fragment
/// lists change, so downstream snapshots can tell which set produced them.
pub const BUILTIN_CORPUS_VERSION: u32 = 1;

/// Built-in name prefixes (opening fragments).
static BUILTIN_PREFIXES: &[&str] = &[
	"Mari", "Thermo", "Cyto", "Primo", "Rhodo", "Nitro", "Flavo", "Sulfo",
	"Bruma", "Ferrum", "Silex", "Vulcan", "Aero", "Astro", "Elo", "Igni",
	"Umbra", "Entero", "Aqua", "Ocean", "Aether", "Argent", "Osmo", "Halo",
];

/// Built-in name cofixes (middle fragments).
static BUILTIN_COFIXES: &[&str] = &[
	"tho", "ro", "mi", "sta", "ve", "lon", "ber", "nax",
	"ana", "ilo", "emi", "ora", "uvi", "an", "ul", "ix",
];

/// Built-in name suffixes (closing fragments).
static BUILTIN_SUFFIXES: &[&str] = &[
	"pterus", "monas", "coccus", "bacter", "phora", "saurus", "thrix",
	"nema", "vorax", "gaster", "us", "um", "ium", "ella", "ensis",
	"oides", "opsis", "arium", "ans", "ia",
];

/// Flat, unclassified name corpus.
///
/// This is the record shape an external configuration layer supplies: three
/// flat string lists with no a-priori vowel/consonant split. Classification
/// and partitioning happen in `FragmentTable::from_corpus`; the core never
/// reads configuration files itself.
///
/// Derives serde traits so hosts can feed the record from JSON or any other
/// serde-compatible format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NameCorpus {
	/// Opening fragments.
	pub prefixes: Vec<String>,
	/// Middle fragments, inserted between prefix and suffix.
	pub cofixes: Vec<String>,
	/// Closing fragments.
	pub suffixes: Vec<String>,
}

impl NameCorpus {
	/// Creates a corpus from flat token lists.
	pub fn new(prefixes: Vec<String>, cofixes: Vec<String>, suffixes: Vec<String>) -> Self {
		Self { prefixes, cofixes, suffixes }
	}
}

impl Default for NameCorpus {
	/// Returns the built-in corpus (see `BUILTIN_CORPUS_VERSION`).
	///
	/// The lists are deterministic: same order, same content, every run.
	fn default() -> Self {
		Self {
			prefixes: BUILTIN_PREFIXES.iter().map(|s| (*s).to_owned()).collect(),
			cofixes: BUILTIN_COFIXES.iter().map(|s| (*s).to_owned()).collect(),
			suffixes: BUILTIN_SUFFIXES.iter().map(|s| (*s).to_owned()).collect(),
		}
	}
}
