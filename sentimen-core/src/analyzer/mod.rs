//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Strips punctuation, collapses whitespace, lowercases
//! - **Tokenizer**: Splits normalized text into words
//! - **Terms**: Counts word frequencies for summaries

pub mod normalizer;
pub mod terms;
pub mod tokenizer;

pub use normalizer::{NormalizedText, TextNormalizer};
pub use terms::TermFrequencies;
pub use tokenizer::Tokenizer;
