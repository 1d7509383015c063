//! Core types for the Sentimen sentiment analyzer.
//!
//! This crate provides the value types shared between the analysis core
//! and the command line front end. Keeping them separate ensures:
//!
//! - **Stable output**: the CLI and the library render results identically
//! - **Clean boundaries**: no dependency from the types on the scoring code
//! - **Cheap values**: every result type is `Copy` or a small owned string

#![warn(missing_docs)]

use core::fmt;
use std::borrow::Cow;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Sentiment polarity assigned to a text.
///
/// `Unknown` is reserved for texts that never reached the classifier
/// (for example text in a language other than Indonesian).
///
/// Labels render in Indonesian, matching what end users of the analyzer read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Polarity {
    /// More positive than negative evidence, no negation.
    #[serde(rename = "Positif")]
    Positive = 0,
    /// More negative evidence, or any negation marker present.
    #[serde(rename = "Negatif")]
    Negative = 1,
    /// Balanced (or absent) evidence.
    #[serde(rename = "Netral")]
    Neutral = 2,
    /// Text was not analyzed.
    #[serde(rename = "Tidak Diketahui")]
    Unknown = 3,
}

impl Polarity {
    /// All polarities in display order.
    pub const ALL: [Polarity; 4] = [
        Polarity::Positive,
        Polarity::Negative,
        Polarity::Neutral,
        Polarity::Unknown,
    ];

    /// Indonesian display label.
    #[must_use]
    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Polarity::Positive => "Positif",
            Polarity::Negative => "Negatif",
            Polarity::Neutral => "Netral",
            Polarity::Unknown => "Tidak Diketahui",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric sentiment score.
///
/// Scores are signed: a negation marker forces a negative label but keeps
/// `negative - positive` as the score, which can be zero or below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// Score computed by the classifier.
    Value(i32),
    /// The classifier did not run.
    NotApplicable,
}

impl Score {
    /// Text used for [`Score::NotApplicable`] in every output format.
    pub const NOT_APPLICABLE: &'static str = "N/A";

    /// Returns the numeric value, if any.
    #[must_use]
    #[inline(always)]
    pub const fn value(self) -> Option<i32> {
        match self {
            Score::Value(v) => Some(v),
            Score::NotApplicable => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{}", v),
            Score::NotApplicable => f.write_str(Self::NOT_APPLICABLE),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Value(v) => serializer.serialize_i32(*v),
            Score::NotApplicable => serializer.serialize_str(Self::NOT_APPLICABLE),
        }
    }
}

/// Outcome of analyzing one text.
///
/// Produced once per text and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SentimentResult {
    /// Polarity label
    pub label: Polarity,
    /// Signed score, or not applicable for [`Polarity::Unknown`]
    pub score: Score,
}

impl SentimentResult {
    /// Creates a classified result.
    #[inline(always)]
    pub const fn new(label: Polarity, score: i32) -> Self {
        Self {
            label,
            score: Score::Value(score),
        }
    }

    /// Result for texts that were not analyzed.
    #[inline(always)]
    pub const fn unknown() -> Self {
        Self {
            label: Polarity::Unknown,
            score: Score::NotApplicable,
        }
    }

    /// Neutral result with score zero.
    #[inline(always)]
    pub const fn neutral() -> Self {
        Self::new(Polarity::Neutral, 0)
    }

    /// Returns `true` when the classifier produced this result.
    #[must_use]
    #[inline(always)]
    pub const fn is_classified(&self) -> bool {
        !matches!(self.label, Polarity::Unknown)
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {})", self.label, self.score)
    }
}

/// Lexicon hits for one text.
///
/// Each lexicon entry contributes at most one hit regardless of how often
/// it occurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LexiconCounts {
    /// Number of distinct positive entries found
    pub positive: u32,
    /// Number of distinct negative entries found
    pub negative: u32,
}

impl LexiconCounts {
    /// Creates counts from raw values.
    #[inline(always)]
    pub const fn new(positive: u32, negative: u32) -> Self {
        Self { positive, negative }
    }

    /// `negative - positive` as a signed value.
    #[must_use]
    #[inline(always)]
    pub const fn negative_margin(self) -> i32 {
        self.negative as i32 - self.positive as i32
    }
}

/// Best-effort language identifier.
///
/// Holds an ISO 639-1 code where one is known (`"id"`, `"en"`), otherwise
/// the detector's own code, or the sentinel `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(Cow<'static, str>);

impl LanguageTag {
    /// Bahasa Indonesia.
    pub const INDONESIAN: LanguageTag = LanguageTag(Cow::Borrowed("id"));
    /// Language could not be determined.
    pub const UNKNOWN: LanguageTag = LanguageTag(Cow::Borrowed("unknown"));

    /// Creates a tag from a code. The code is stored lowercase.
    pub fn new(code: impl Into<String>) -> Self {
        let mut code = code.into();
        code.make_ascii_lowercase();
        Self(Cow::Owned(code))
    }

    /// Creates a tag from a static code without allocating.
    #[inline(always)]
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Returns the code.
    #[must_use]
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for Bahasa Indonesia.
    #[must_use]
    #[inline(always)]
    pub fn is_indonesian(&self) -> bool {
        self.as_str() == Self::INDONESIAN.as_str()
    }

    /// Returns `true` for the unknown sentinel.
    #[must_use]
    #[inline(always)]
    pub fn is_unknown(&self) -> bool {
        self.as_str() == Self::UNKNOWN.as_str()
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyzer configuration options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Minimum detector confidence (0.0-1.0) for a language to be accepted.
    /// Below it the text is tagged `unknown`.
    /// Default: 0.0 (accept whatever the detector reports)
    pub min_detection_confidence: f64,
    /// Number of most frequent terms reported for a text or column.
    /// Default: 10
    pub top_terms: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.0,
            top_terms: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Returns a copy with the detection threshold clamped into `0.0..=1.0`.
    #[must_use]
    pub fn with_min_detection_confidence(self, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            min_detection_confidence: threshold,
            ..self
        }
    }
}

/// Errors raised when building a lexicon or negation marker set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// Entry is empty.
    #[error("lexicon entry is empty")]
    Empty,
    /// Entry contains uppercase characters.
    #[error("lexicon entry {entry:?} contains uppercase characters")]
    Uppercase {
        /// The offending entry.
        entry: String,
    },
    /// Entry has leading or trailing whitespace.
    #[error("lexicon entry {entry:?} has leading or trailing whitespace")]
    Untrimmed {
        /// The offending entry.
        entry: String,
    },
}

/// Errors a language detector can report.
///
/// The language gate never surfaces these; they are logged and mapped to
/// [`LanguageTag::UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    /// Not enough signal in the text to pick a language.
    #[error("no language features found in input")]
    NoSignal,
    /// A language was found but with too little confidence.
    #[error("detected {language} with confidence {confidence:.2} (min: {threshold:.2})")]
    LowConfidence {
        /// The best candidate.
        language: LanguageTag,
        /// The detector's confidence.
        confidence: f64,
        /// The configured minimum.
        threshold: f64,
    },
    /// Detector backend failure.
    #[error("language detector failed: {0}")]
    Backend(String),
}
