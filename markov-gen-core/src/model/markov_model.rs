use std::collections::{HashMap, HashSet};

use super::tokenizer;

/// First-order word Markov model.
///
/// The model is the triple of transition table, vocabulary and corpus,
/// built once from one input text. It is never mutated after build; a
/// rebuild produces a fresh instance that replaces the old one wholesale.
///
/// # Responsibilities
/// - Accumulate observed successors for each consecutive word pair
/// - Filter branch points by distinct-successor degree
/// - Retain the full token sequence for restart sampling
///
/// # Invariants
/// - Every transition-table key has at least 2 distinct successors
/// - `vocabulary` is exactly the transition-table key set
/// - Successor lists keep duplicates and insertion order: the list is the
///   empirical distribution the generator samples from
#[derive(Clone, Debug, PartialEq)]
pub struct MarkovModel {
	/// Mapping from a word to its observed successors (duplicates kept).
	transitions: HashMap<String, Vec<String>>,
	/// Words retained as branch points (transition-table keys).
	vocabulary: HashSet<String>,
	/// Full ordered token sequence of the input text.
	corpus: Vec<String>,
}

impl MarkovModel {
	/// Tokenizes `text` and builds a model from the resulting sequence.
	pub fn build(text: &str) -> Self {
		Self::from_tokens(tokenizer::tokenize(text))
	}

	/// Builds a model from an already-tokenized sequence.
	///
	/// # Behavior
	/// - Scans consecutive pairs and appends each successor to the list
	///   keyed by its predecessor.
	/// - Drops every key with fewer than 2 distinct successors, so that a
	///   generated walk can never be trapped in a deterministic cycle
	///   through a retained key.
	/// - Keeps the full input sequence as the corpus.
	///
	/// Fewer than 2 tokens, or no key reaching 2 distinct successors,
	/// yields an empty table and vocabulary. This is not an error at build
	/// time; generation detects it and reports it.
	pub fn from_tokens(tokens: Vec<String>) -> Self {
		let mut transitions: HashMap<String, Vec<String>> = HashMap::new();
		for pair in tokens.windows(2) {
			transitions
				.entry(pair[0].clone())
				.or_default()
				.push(pair[1].clone());
		}

		// Degree filtering: a key with a single distinct successor cannot
		// branch. The retained lists stay non-deduplicated.
		transitions.retain(|_, successors| Self::distinct_count(successors) >= 2);

		let vocabulary = transitions.keys().cloned().collect();

		Self { transitions, vocabulary, corpus: tokens }
	}

	/// Number of distinct words in a successor list.
	pub(crate) fn distinct_count(successors: &[String]) -> usize {
		successors.iter().collect::<HashSet<_>>().len()
	}

	/// Returns the observed successor list of `word`, duplicates included.
	///
	/// `None` if the word is not a branch point (degree filtering removed
	/// it, or it never appeared as a predecessor).
	pub fn successors(&self, word: &str) -> Option<&[String]> {
		self.transitions.get(word).map(Vec::as_slice)
	}

	/// Iterates over the transition table as `(word, successors)` pairs.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.transitions.iter().map(|(word, successors)| (word.as_str(), successors.as_slice()))
	}

	/// The set of words retained as branch points.
	pub fn vocabulary(&self) -> &HashSet<String> {
		&self.vocabulary
	}

	/// The full ordered token sequence the model was built from.
	pub fn corpus(&self) -> &[String] {
		&self.corpus
	}

	/// True when no key survived degree filtering.
	pub fn is_empty(&self) -> bool {
		self.vocabulary.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CORPUS: &str = "the cat sat on the mat the cat ran";

	#[test]
	fn test_worked_example() {
		let model = MarkovModel::build(CORPUS);

		assert_eq!(model.corpus().len(), 9);
		assert_eq!(model.successors("the"), Some(&["cat".to_owned(), "mat".to_owned(), "cat".to_owned()][..]));
		assert_eq!(model.successors("cat"), Some(&["sat".to_owned(), "ran".to_owned()][..]));

		// Single distinct successor: dropped by degree filtering.
		assert_eq!(model.successors("sat"), None);
		assert_eq!(model.successors("on"), None);
		assert_eq!(model.successors("mat"), None);

		let expected: HashSet<String> = ["the", "cat"].iter().map(|w| (*w).to_owned()).collect();
		assert_eq!(*model.vocabulary(), expected);
	}

	#[test]
	fn test_degree_filter_invariant() {
		let text = "one fish two fish red fish blue fish one cat two cat one dog";
		let model = MarkovModel::build(text);

		assert!(!model.is_empty());
		for (_, successors) in model.transitions() {
			assert!(MarkovModel::distinct_count(successors) >= 2);
		}
	}

	#[test]
	fn test_idempotent_build() {
		let first = MarkovModel::build(CORPUS);
		let second = MarkovModel::build(CORPUS);
		assert_eq!(first, second);
	}

	#[test]
	fn test_short_inputs() {
		assert!(MarkovModel::build("").is_empty());
		assert!(MarkovModel::build("hello").is_empty());
		assert!(MarkovModel::build("hello world").is_empty());
	}

	#[test]
	fn test_no_branch_point_reaches_degree_two() {
		// "a" has one distinct successor observed three times.
		let model = MarkovModel::build("a a a a");
		assert!(model.is_empty());
		assert_eq!(model.corpus().len(), 4);
	}

	#[test]
	fn test_successor_word_not_necessarily_in_vocabulary() {
		let model = MarkovModel::build(CORPUS);
		// "sat" can be generated as a successor of "cat" but is not a
		// valid branch point or start word.
		assert!(model.successors("cat").unwrap().contains(&"sat".to_owned()));
		assert!(!model.vocabulary().contains("sat"));
	}
}
