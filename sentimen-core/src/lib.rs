//! Sentiment analysis for Bahasa Indonesia.
//!
//! Text is normalized, matched against fixed positive and negative
//! lexicons, and adjusted for negation. A language gate keeps
//! non-Indonesian text away from the classifier.
//!
//! - [`analyzer`]: normalization, tokenization, term counts
//! - [`sentiment`]: lexicons, scoring, negation, classification
//! - [`language`]: language identification
//! - [`log`]: append-only analysis log
//! - [`pipeline`]: gate, classifier and log wired together
//!
//! # Examples
//!
//! ```
//! use sentimen_core::analyzer::TextNormalizer;
//! use sentimen_core::SentimentClassifier;
//! use sentimen_types::Polarity;
//!
//! let text = TextNormalizer::new().normalize("  Tidak   BAGUS!! ");
//! assert_eq!(text.as_str(), "tidak bagus");
//!
//! let result = SentimentClassifier::default().classify_normalized(&text);
//! assert_eq!(result.label, Polarity::Negative);
//! ```

pub mod analyzer;
pub mod language;
pub mod log;
pub mod pipeline;
pub mod sentiment;

pub use language::{FixedLanguage, LanguageDetector, LanguageGate, WhatlangDetector};
pub use log::{AnalysisLogEntry, CsvLogSink, LogError, LogSink, NoopLogSink};
pub use pipeline::{Analysis, BatchReport, SentimentPipeline};
pub use sentiment::{BatchSummary, Lexicon, NegationMarkers, SentimentClassifier};

pub use sentimen_types;
