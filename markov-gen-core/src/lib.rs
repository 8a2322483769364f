//! First-order Markov chain text generation library.
//!
//! This crate provides a word-level Markov generation system including:
//! - Whitespace tokenization with punctuation stripping
//! - Transition-table construction with degree filtering
//! - Stochastic generation with dead-end recovery
//! - Descriptive model statistics
//!
//! The high-level API is the `Session` type, which owns the single live
//! model and exposes build, generate, stats and vocabulary queries.

/// Core Markov model and generation logic.
///
/// This module exposes the tokenizer, the model, the generator and the
/// stats reporter.
pub mod model;

/// Single-model session facade.
///
/// Owns the current `MarkovModel` (if any) and exposes the public
/// build/generate/stats/vocabulary surface.
pub mod session;
