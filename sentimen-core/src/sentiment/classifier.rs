//! Sentiment classification: normalize, score, adjust.

use serde::Serialize;
use tracing::debug;

use sentimen_types::{LexiconCounts, SentimentResult};

use crate::analyzer::{NormalizedText, TextNormalizer};
use crate::sentiment::lexicon::{Lexicon, NegationMarkers};
use crate::sentiment::negation::{NegationAdjuster, PolarityDecision};
use crate::sentiment::scorer::{LexiconMatches, LexiconScorer, SubstringScorer};

/// Full trace of one classification.
#[derive(Debug, Clone, Serialize)]
pub struct Classification<'c> {
    /// Final result
    pub result: SentimentResult,
    /// Text after normalization
    pub normalized: String,
    /// Hit counts
    pub counts: LexiconCounts,
    /// Matched lexicon entries
    pub matches: LexiconMatches<'c>,
    /// Negation marker that forced a negative label
    pub negation: Option<&'c str>,
}

/// Keyword-and-negation sentiment classifier.
///
/// Lexicon and negation markers are fixed at construction. Classification is
/// a pure function of the input text: it never fails and never panics.
///
/// # Examples
///
/// ```
/// use sentimen_core::SentimentClassifier;
/// use sentimen_types::{Polarity, SentimentResult};
///
/// let classifier = SentimentClassifier::default();
/// assert_eq!(
///     classifier.classify("Saya sangat puas dan senang!"),
///     SentimentResult::new(Polarity::Positive, 2)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SentimentClassifier<S = SubstringScorer> {
    normalizer: TextNormalizer,
    lexicon: Lexicon,
    adjuster: NegationAdjuster,
    scorer: S,
}

impl Default for SentimentClassifier<SubstringScorer> {
    fn default() -> Self {
        Self::new(Lexicon::indonesian(), NegationMarkers::indonesian())
    }
}

impl SentimentClassifier<SubstringScorer> {
    /// Creates a classifier with substring matching.
    pub fn new(lexicon: Lexicon, markers: NegationMarkers) -> Self {
        Self::with_scorer(lexicon, markers, SubstringScorer)
    }
}

impl<S: LexiconScorer> SentimentClassifier<S> {
    /// Creates a classifier with a custom scoring strategy.
    pub fn with_scorer(lexicon: Lexicon, markers: NegationMarkers, scorer: S) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            lexicon,
            adjuster: NegationAdjuster::new(markers),
            scorer,
        }
    }

    /// The lexicon in use.
    #[inline(always)]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The negation markers in use.
    #[inline(always)]
    pub fn markers(&self) -> &NegationMarkers {
        self.adjuster.markers()
    }

    /// The scoring strategy in use.
    #[inline(always)]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Classifies raw text.
    pub fn classify(&self, raw: &str) -> SentimentResult {
        let text = self.normalizer.normalize(raw);
        self.classify_normalized(&text)
    }

    /// Classifies text that is already normalized.
    pub fn classify_normalized(&self, text: &NormalizedText) -> SentimentResult {
        let counts = self.scorer.score(text, &self.lexicon);
        let decision = self.adjuster.adjust(text, counts);
        log_decision(counts, &decision);
        decision.into_result()
    }

    /// Classifies raw text and keeps the intermediate findings.
    pub fn classify_detailed(&self, raw: &str) -> Classification<'_> {
        let text = self.normalizer.normalize(raw);
        let matches = self.scorer.matches(&text, &self.lexicon);
        let counts = matches.counts();
        let decision = self.adjuster.adjust(&text, counts);
        log_decision(counts, &decision);

        Classification {
            result: decision.into_result(),
            normalized: text.into_string(),
            counts,
            matches,
            negation: decision.negation,
        }
    }

    /// Classifies every row in order.
    ///
    /// Returns one result per row. Missing rows are classified as the empty
    /// string, which is always neutral. A single normalization buffer is
    /// reused across rows.
    pub fn classify_batch<I, T>(&self, rows: I) -> Vec<SentimentResult>
    where
        I: IntoIterator<Item = Option<T>>,
        T: AsRef<str>,
    {
        let rows = rows.into_iter();
        let mut results = Vec::with_capacity(rows.size_hint().0);
        let mut buf = NormalizedText::with_capacity(256);

        for row in rows {
            let raw: &str = match &row {
                Some(r) => r.as_ref(),
                None => "",
            };
            self.normalizer.normalize_into(raw, &mut buf);
            results.push(self.classify_normalized(&buf));
        }

        debug!(rows = results.len(), "classified batch");
        results
    }
}

#[inline]
fn log_decision(counts: LexiconCounts, decision: &PolarityDecision<'_>) {
    debug!(
        positive = counts.positive,
        negative = counts.negative,
        negation = decision.negation,
        label = %decision.label,
        score = decision.score,
        "classified text"
    );
}
