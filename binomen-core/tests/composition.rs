use binomen_core::error::NamingError;
use binomen_core::naming::compose_input::{ComposeInput, FirstPool, Structure};
use binomen_core::naming::composer::NameComposer;
use binomen_core::naming::corpus::NameCorpus;
use binomen_core::naming::fragment_table::{FragmentRole, FragmentTable};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn corpus(prefixes: &[&str], cofixes: &[&str], suffixes: &[&str]) -> NameCorpus {
    NameCorpus::new(
        prefixes.iter().map(|s| (*s).to_owned()).collect(),
        cofixes.iter().map(|s| (*s).to_owned()).collect(),
        suffixes.iter().map(|s| (*s).to_owned()).collect(),
    )
}

#[test]
fn fragment_joins_alternate_vowel_and_consonant() {
    let table = FragmentTable::builtin();
    let composer = NameComposer::new(&table);
    let input = ComposeInput::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let name = composer.compose(&input, &mut rng).unwrap();
        for pair in name.fragments().windows(2) {
            assert_ne!(
                pair[0].ends_with_vowel(),
                pair[1].starts_with_vowel(),
                "facets must alternate across the join in {:?}",
                name.text()
            );
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_names() {
    let table = FragmentTable::builtin();
    let composer = NameComposer::new(&table);
    let input = ComposeInput::default();

    let mut first_run = StdRng::seed_from_u64(99);
    let mut second_run = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let a = composer.compose(&input, &mut first_run).unwrap();
        let b = composer.compose(&input, &mut second_run).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn three_fragment_composition_is_fully_forced_by_singleton_buckets() {
    // "Mari" ends in a vowel, so the cofix must lead with a consonant;
    // "tho" ends in a vowel, so the suffix must lead with a consonant.
    let table =
        FragmentTable::from_corpus(&corpus(&["Mari"], &["tho"], &["pterus"])).unwrap();
    let composer = NameComposer::new(&table);

    let mut input = ComposeInput::default();
    input.structure = Structure::Three;
    input.first_pool = FirstPool::PrefixOnly;

    let mut rng = StdRng::seed_from_u64(0);
    let name = composer.compose(&input, &mut rng).unwrap();
    assert_eq!(name.text(), "Marithopterus");
    assert_eq!(name.fragments().len(), 3);
}

#[test]
fn missing_consonant_suffix_bucket_fails_instead_of_falling_back() {
    // Every suffix leads with a vowel, but "Mari" ends in one.
    let table = FragmentTable::from_corpus(&corpus(&["Mari"], &["tho"], &["ium"])).unwrap();
    let composer = NameComposer::new(&table);

    let mut input = ComposeInput::default();
    input.structure = Structure::Two;
    input.first_pool = FirstPool::PrefixOnly;

    let mut rng = StdRng::seed_from_u64(0);
    let err = composer.compose(&input, &mut rng).unwrap_err();
    assert_eq!(
        err,
        NamingError::EmptyBucket {
            role: FragmentRole::ConsonantSuffix
        }
    );
    assert!(err.to_string().contains("consonant-leading suffix"));
}

#[test]
fn output_is_capitalized_regardless_of_corpus_casing() {
    let table = FragmentTable::from_corpus(&corpus(&["mari"], &["tho"], &["pterus"])).unwrap();
    let composer = NameComposer::new(&table);

    let mut input = ComposeInput::default();
    input.structure = Structure::Two;
    input.first_pool = FirstPool::PrefixOnly;

    let mut rng = StdRng::seed_from_u64(0);
    let name = composer.compose(&input, &mut rng).unwrap();
    assert_eq!(name.text(), "Maripterus");

    let table = FragmentTable::builtin();
    let composer = NameComposer::new(&table);
    let input = ComposeInput::default();
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..50 {
        let name = composer.compose(&input, &mut rng).unwrap();
        assert!(name.text().chars().next().unwrap().is_uppercase());
    }
}

#[test]
fn cofix_probability_extremes_pin_the_structure() {
    let table = FragmentTable::builtin();
    let composer = NameComposer::new(&table);
    let mut rng = StdRng::seed_from_u64(3);

    let mut input = ComposeInput::default();
    input.set_cofix_probability(0.0).unwrap();
    for _ in 0..20 {
        assert_eq!(composer.compose(&input, &mut rng).unwrap().fragments().len(), 2);
    }

    input.set_cofix_probability(1.0).unwrap();
    for _ in 0..20 {
        assert_eq!(composer.compose(&input, &mut rng).unwrap().fragments().len(), 3);
    }
}

#[test]
fn cofix_probability_is_range_checked() {
    let mut input = ComposeInput::default();
    assert!(matches!(
        input.set_cofix_probability(2.0),
        Err(NamingError::InvalidProbability { .. })
    ));
    assert!(matches!(
        input.set_cofix_probability(-1.0),
        Err(NamingError::InvalidProbability { .. })
    ));

    input.set_cofix_probability(0.25).unwrap();
    assert_eq!(input.cofix_probability(), 0.25);
}

#[test]
fn opening_fragment_may_come_from_either_prefix_bucket() {
    // No facet preference for the opening pick: over enough draws both
    // vowel-leading and consonant-leading starts appear.
    let table = FragmentTable::builtin();
    let composer = NameComposer::new(&table);
    let input = ComposeInput::default();
    let mut rng = StdRng::seed_from_u64(11);

    let mut saw_vowel_start = false;
    let mut saw_consonant_start = false;
    for _ in 0..100 {
        let name = composer.compose(&input, &mut rng).unwrap();
        if name.fragments()[0].starts_with_vowel() {
            saw_vowel_start = true;
        } else {
            saw_consonant_start = true;
        }
    }
    assert!(saw_vowel_start);
    assert!(saw_consonant_start);
}
