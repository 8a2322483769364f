use markov_gen_core::session::Session;

// Small sample corpus with enough word repetition for a few branch points.
const SAMPLE: &str = "\
    The quick brown fox jumps over the lazy dog. \
    The lazy dog sleeps while the quick fox runs. \
    A quick dog and a lazy fox walk over the hill. \
    The fox and the dog are quick, the hill is quiet.";

fn main() {
    let mut session = Session::new();

    // Stats before any build: no model yet, explicit absence
    match session.stats() {
        Some(_) => println!("Should not happen"),
        None => println!("No model built yet"),
    }

    // Build the model; this tokenizes the text, accumulates successor
    // lists and drops every word with fewer than 2 distinct successors
    session.build(SAMPLE);

    if let Some(stats) = session.stats() {
        println!(
            "Model built: {} corpus words, {} vocabulary entries, avg branching {:?}",
            stats.corpus_size, stats.vocab_size, stats.avg_branching
        );
    }

    // The vocabulary is the set of valid start words
    let mut vocabulary: Vec<String> = session.vocabulary().into_iter().collect();
    vocabulary.sort();
    println!("Vocabulary: {}", vocabulary.join(", "));

    // Generate with a random start drawn from the corpus
    match session.generate(20, None) {
        Ok(text) => println!("Generated: {}", text),
        Err(e) => println!("Should not happen: {}", e),
    }

    // Generate from a chosen start word; normalization applies, so
    // casing and surrounding punctuation are accepted
    match session.generate(12, Some("The")) {
        Ok(text) => println!("Generated from 'The': {}", text),
        Err(e) => println!("Should not happen: {}", e),
    }

    // A word outside the vocabulary is rejected with a bounded sample
    // of valid start words
    match session.generate(12, Some("zebra")) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("'zebra' was rejected: {}", e),
    }

    // A rebuild replaces the model wholesale; a corpus without branch
    // points yields an empty vocabulary and generation reports it
    session.build("one two three");
    match session.generate(5, None) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty model was rejected: {}", e),
    }
}
