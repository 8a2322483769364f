use serde::Serialize;

use super::markov_model::MarkovModel;

/// Descriptive statistics of a built model.
///
/// # Fields
/// - `vocab_size`: number of branch points retained by degree filtering.
/// - `corpus_size`: length of the full token sequence.
/// - `avg_branching`: mean distinct-successor count over all transition
///   table keys, rounded to 2 decimal places for display. `None` when the
///   table has zero keys: the mean of an empty set is undefined and is
///   reported as such rather than as a silent zero.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelStats {
	pub vocab_size: usize,
	pub corpus_size: usize,
	pub avg_branching: Option<f64>,
}

impl ModelStats {
	/// Derives statistics from a model. Read-only.
	pub fn from_model(model: &MarkovModel) -> Self {
		let branching: Vec<usize> = model
			.transitions()
			.map(|(_, successors)| MarkovModel::distinct_count(successors))
			.collect();

		let avg_branching = if branching.is_empty() {
			None
		} else {
			let mean = branching.iter().sum::<usize>() as f64 / branching.len() as f64;
			Some((mean * 100.0).round() / 100.0)
		};

		Self {
			vocab_size: model.vocabulary().len(),
			corpus_size: model.corpus().len(),
			avg_branching,
		}
	}
}
