use std::collections::HashSet;

use crate::model::generator::{GenerateError, Generator};
use crate::model::markov_model::MarkovModel;
use crate::model::stats::ModelStats;

/// Session owning the single live model.
///
/// # Responsibilities
/// - Hold the current `MarkovModel`, if one has been built
/// - Replace it atomically on rebuild (the whole triple is swapped, never
///   mutated in place)
/// - Expose the build/generate/stats/vocabulary surface
///
/// One writer path (`build`) and any number of readers; callers that share
/// a session across threads wrap it in a lock.
#[derive(Clone, Debug, Default)]
pub struct Session {
	model: Option<MarkovModel>,
}

impl Session {
	/// Creates a session with no model built.
	pub fn new() -> Self {
		Self { model: None }
	}

	/// Builds a model from `text`, replacing the previous one.
	pub fn build(&mut self, text: &str) {
		self.model = Some(MarkovModel::build(text));
	}

	/// Generates `num_words` words joined by single spaces.
	///
	/// # Errors
	/// - `EmptyModel` when no model has been built or the vocabulary is
	///   empty.
	/// - `UnknownStartWord` when `start_word` is absent from the
	///   vocabulary after normalization.
	pub fn generate(&self, num_words: usize, start_word: Option<&str>) -> Result<String, GenerateError> {
		let model = self.model.as_ref().ok_or(GenerateError::EmptyModel)?;
		let words = Generator::new(model).generate(num_words, start_word)?;
		Ok(words.join(" "))
	}

	/// Statistics of the current model.
	///
	/// `None` when no model has been built, which is distinct from a
	/// built-but-empty model (that yields `Some` with an undefined
	/// branching factor).
	pub fn stats(&self) -> Option<ModelStats> {
		self.model.as_ref().map(ModelStats::from_model)
	}

	/// Read-only snapshot of the vocabulary. Empty when no model has been
	/// built.
	pub fn vocabulary(&self) -> HashSet<String> {
		self.model
			.as_ref()
			.map(|model| model.vocabulary().clone())
			.unwrap_or_default()
	}

	/// The current model, for callers that drive the generator with their
	/// own random source.
	pub fn model(&self) -> Option<&MarkovModel> {
		self.model.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CORPUS: &str = "the cat sat on the mat the cat ran";

	#[test]
	fn test_generate_without_model() {
		let session = Session::new();
		assert_eq!(session.generate(5, None), Err(GenerateError::EmptyModel));
	}

	#[test]
	fn test_stats_absent_until_built() {
		let mut session = Session::new();
		assert!(session.stats().is_none());

		session.build("");
		// Built but empty is an explicit stats result, not an absence.
		let stats = session.stats().unwrap();
		assert_eq!(stats.vocab_size, 0);
		assert_eq!(stats.avg_branching, None);
	}

	#[test]
	fn test_generate_joins_with_spaces() {
		let mut session = Session::new();
		session.build(CORPUS);

		let text = session.generate(10, Some("the")).unwrap();
		let words: Vec<&str> = text.split(' ').collect();
		assert_eq!(words.len(), 10);
		assert_eq!(words[0], "the");
		for word in words {
			assert!(session.model().unwrap().corpus().contains(&word.to_owned()));
		}
	}

	#[test]
	fn test_build_replaces_model() {
		let mut session = Session::new();
		session.build(CORPUS);
		assert_eq!(session.stats().unwrap().vocab_size, 2);

		session.build("x y");
		let stats = session.stats().unwrap();
		assert_eq!(stats.vocab_size, 0);
		assert_eq!(stats.corpus_size, 2);
		assert!(session.vocabulary().is_empty());
	}

	#[test]
	fn test_vocabulary_snapshot() {
		let mut session = Session::new();
		assert!(session.vocabulary().is_empty());

		session.build(CORPUS);
		let expected: HashSet<String> = ["the", "cat"].iter().map(|w| (*w).to_owned()).collect();
		assert_eq!(session.vocabulary(), expected);
	}
}
