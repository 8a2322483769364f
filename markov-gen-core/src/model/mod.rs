//! Top-level module for the Markov generation system.
//!
//! This module provides a first-order word Markov chain, including:
//! - Text-to-token normalization (`tokenizer`)
//! - The transition table, vocabulary and corpus triple (`MarkovModel`)
//! - The stochastic generation walk (`Generator`)
//! - Read-only model statistics (`ModelStats`)

/// High-level interface for generating word sequences from a model.
///
/// Exposes start-word validation, uniform successor sampling and
/// dead-end restart handling, with an injectable random source.
pub mod generator;

/// First-order word transition model.
///
/// Handles token-pair ingestion, successor accumulation and
/// degree filtering of branch points.
pub mod markov_model;

/// Descriptive statistics derived from a built model.
///
/// Read-only; holds no state of its own.
pub mod stats;

/// Text normalization into word tokens.
///
/// Lowercases, splits on whitespace and strips surrounding punctuation.
pub mod tokenizer;
