use binomen_core::naming::compose_input::{ComposeInput, FirstPool, Structure};
use binomen_core::naming::composer::NameComposer;
use binomen_core::naming::corpus::NameCorpus;
use binomen_core::naming::fragment_table::FragmentTable;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a fragment table from the built-in corpus
    // A table is classified and partitioned once, then read-only
    let table = FragmentTable::builtin();

    // The composer borrows the table and holds no state of its own
    let composer = NameComposer::new(&table);

    // Compose input controls the structure of generated names
    let mut input = ComposeInput::default();

    // Structure can be set to
    // 'Two' for prefix + suffix
    // 'Three' for prefix + cofix + suffix
    // 'Random' to decide per call using the cofix probability
    input.structure = Structure::Random;

    // The opening fragment is drawn from the combined prefix-or-cofix
    // pool by default; 'PrefixOnly' restricts it to prefixes
    input.first_pool = FirstPool::PrefixOrCofix;

    // Set the probability of a 3-fragment structure (must be between 0.0 and 1.0)
    input.set_cofix_probability(0.5)?;

    // Test invalid probability values
    match input.set_cofix_probability(2.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Probability 2.0 is invalid, must be between 0.0 and 1.0"),
    }
    match input.set_cofix_probability(-1.0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Probability -1.0 is invalid, must be between 0.0 and 1.0"),
    }

    // A corpus with an empty required category cannot become a table
    let broken = NameCorpus::new(vec!["Mari".to_owned()], vec!["tho".to_owned()], Vec::new());
    match FragmentTable::from_corpus(&broken) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected corpus: {e}"),
    }

    // Generation is reproducible: the same seed always yields the same names
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..10 {
        println!("Generated name {}: {}", i + 1, composer.compose(&input, &mut rng)?);
    }

    // Binomial form: a genus section plus an epithet section
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..5 {
        println!("Generated species {}: {}", i + 1, composer.compose_binomial(&input, &mut rng)?);
    }

    Ok(())
}
