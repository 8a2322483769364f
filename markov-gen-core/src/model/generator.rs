use std::fmt;

use rand::Rng;

use super::markov_model::MarkovModel;
use super::tokenizer;

/// Maximum number of vocabulary entries surfaced in an
/// `UnknownStartWord` error message.
const VOCABULARY_SAMPLE_SIZE: usize = 10;

/// Generation failure.
///
/// # Variants
/// - `EmptyModel`: generation attempted with no built model or an empty
///   vocabulary.
/// - `UnknownStartWord`: the supplied start word, after normalization, is
///   not a branch point; carries a bounded vocabulary sample to aid
///   correction.
///
/// Both are recoverable, pure-computation errors; neither is retried.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
	EmptyModel,
	UnknownStartWord { word: String, sample: Vec<String> },
}

impl fmt::Display for GenerateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GenerateError::EmptyModel => {
				write!(f, "Model not built. Load a corpus first.")
			}
			GenerateError::UnknownStartWord { word, sample } => {
				write!(f, "\"{}\" not in vocabulary. Available: {}...", word, sample.join(", "))
			}
		}
	}
}

impl std::error::Error for GenerateError {}

/// High-level generator performing the stochastic walk over a model.
///
/// # Responsibilities
/// - Validate the optional start word against the vocabulary
/// - Draw successors uniformly from non-deduplicated successor lists
/// - Recover from dead ends by restarting from the candidate pool
///
/// The random source is a parameter of `generate_with` so tests can
/// inject a deterministic one; `generate` supplies the process-local
/// source at the boundary.
#[derive(Debug)]
pub struct Generator<'a> {
	model: &'a MarkovModel,
}

impl<'a> Generator<'a> {
	/// Creates a generator over a built model.
	pub fn new(model: &'a MarkovModel) -> Self {
		Self { model }
	}

	/// Generates up to `num_words` words using the process-local random
	/// source.
	///
	/// # Errors
	/// - `EmptyModel` if the vocabulary is empty.
	/// - `UnknownStartWord` if `start_word` is supplied but absent from
	///   the vocabulary after normalization.
	pub fn generate(&self, num_words: usize, start_word: Option<&str>) -> Result<Vec<String>, GenerateError> {
		self.generate_with(num_words, start_word, &mut rand::rng())
	}

	/// Generates up to `num_words` words, drawing from `rng`.
	///
	/// # Behavior
	/// - The candidate pool is the subsequence of the corpus whose
	///   elements are vocabulary members, in corpus order, so random
	///   starts match each word's empirical frequency in the source text.
	/// - The current word is emitted first, then `num_words - 1` draws:
	///   a branch point yields a uniform draw over its successor list;
	///   a dead end yields a uniform redraw from the candidate pool,
	///   emitted as a restart with no transition edge implied.
	/// - An empty candidate pool mid-walk terminates generation early
	///   with the output produced so far. Not an error.
	pub fn generate_with<R: Rng>(
		&self,
		num_words: usize,
		start_word: Option<&str>,
		rng: &mut R,
	) -> Result<Vec<String>, GenerateError> {
		let vocabulary = self.model.vocabulary();
		if vocabulary.is_empty() {
			return Err(GenerateError::EmptyModel);
		}

		let pool: Vec<&str> = self.model
			.corpus()
			.iter()
			.filter(|word| vocabulary.contains(*word))
			.map(String::as_str)
			.collect();

		let mut current = match start_word {
			Some(word) => {
				let normalized = tokenizer::normalize(word);
				if !vocabulary.contains(&normalized) {
					return Err(GenerateError::UnknownStartWord {
						word: word.to_owned(),
						sample: self.vocabulary_sample(),
					});
				}
				normalized
			}
			None => {
				match Self::draw(&pool, rng) {
					Some(word) => word,
					None => return Err(GenerateError::EmptyModel),
				}
			}
		};

		let mut result = Vec::with_capacity(num_words);
		if num_words == 0 {
			return Ok(result);
		}
		result.push(current.clone());

		for _ in 1..num_words {
			match self.model.successors(&current) {
				Some(successors) => {
					// Uniform over the non-deduplicated list: repeats bias
					// the draw toward more frequent historical transitions.
					current = successors[rng.random_range(0..successors.len())].clone();
				}
				None => {
					// Dead end: restart from the pool, no edge implied.
					current = match Self::draw(&pool, rng) {
						Some(word) => word,
						None => break,
					};
				}
			}
			result.push(current.clone());
		}

		Ok(result)
	}

	/// Uniform draw from the candidate pool. `None` if the pool is empty.
	fn draw<R: Rng>(pool: &[&str], rng: &mut R) -> Option<String> {
		if pool.is_empty() {
			return None;
		}
		Some(pool[rng.random_range(0..pool.len())].to_owned())
	}

	/// Bounded, sorted sample of valid start words.
	fn vocabulary_sample(&self) -> Vec<String> {
		let mut sample: Vec<String> = self.model.vocabulary().iter().cloned().collect();
		sample.sort();
		sample.truncate(VOCABULARY_SAMPLE_SIZE);
		sample
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::{RngCore, SeedableRng};

	const CORPUS: &str = "the cat sat on the mat the cat ran";

	/// Random source that always yields zero, so every uniform draw
	/// resolves to index 0.
	struct ZeroRng;

	impl RngCore for ZeroRng {
		fn next_u32(&mut self) -> u32 {
			0
		}

		fn next_u64(&mut self) -> u64 {
			0
		}

		fn fill_bytes(&mut self, dst: &mut [u8]) {
			dst.fill(0);
		}
	}

	#[test]
	fn test_empty_model() {
		let model = MarkovModel::build("");
		let generator = Generator::new(&model);
		assert_eq!(generator.generate(5, None), Err(GenerateError::EmptyModel));
	}

	#[test]
	fn test_empty_model_takes_precedence_over_start_word() {
		// Built but empty: "a" never reaches 2 distinct successors.
		let model = MarkovModel::build("a a a a");
		let generator = Generator::new(&model);
		assert_eq!(generator.generate(5, Some("a")), Err(GenerateError::EmptyModel));
	}

	#[test]
	fn test_unknown_start_word() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);

		// "sat" is in the corpus but was dropped by degree filtering.
		let error = generator.generate(1, Some("sat")).unwrap_err();
		assert_eq!(
			error,
			GenerateError::UnknownStartWord {
				word: "sat".to_owned(),
				sample: vec!["cat".to_owned(), "the".to_owned()],
			}
		);
		let message = error.to_string();
		assert!(message.contains("\"sat\" not in vocabulary"));
		assert!(message.contains("cat, the"));
	}

	#[test]
	fn test_start_word_is_normalized() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);

		let words = generator.generate(1, Some("The!")).unwrap();
		assert_eq!(words, vec!["the"]);
	}

	#[test]
	fn test_dead_end_triggers_restart() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);

		// Index-0 draws walk the -> cat -> sat; "sat" is a dead end, so
		// the fourth word is a pool restart (index 0 -> "the"), not a
		// continuation.
		let words = generator.generate_with(5, Some("the"), &mut ZeroRng).unwrap();
		assert_eq!(words, vec!["the", "cat", "sat", "the", "cat"]);
	}

	#[test]
	fn test_length_bound() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(42);

		let words = generator.generate_with(50, None, &mut rng).unwrap();
		assert_eq!(words.len(), 50);

		// Every emitted word comes from the corpus.
		for word in &words {
			assert!(model.corpus().contains(word));
		}
	}

	#[test]
	fn test_deterministic_under_seeded_source() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);

		let mut first_rng = StdRng::seed_from_u64(7);
		let mut second_rng = StdRng::seed_from_u64(7);
		let first = generator.generate_with(20, None, &mut first_rng).unwrap();
		let second = generator.generate_with(20, None, &mut second_rng).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_first_word_is_a_vocabulary_member() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(1);

		let words = generator.generate_with(1, None, &mut rng).unwrap();
		assert!(model.vocabulary().contains(&words[0]));
	}

	#[test]
	fn test_zero_words() {
		let model = MarkovModel::build(CORPUS);
		let generator = Generator::new(&model);
		assert_eq!(generator.generate(0, None).unwrap(), Vec::<String>::new());
	}
}
