//! Negation handling and the final polarity decision.

use serde::Serialize;
use sentimen_types::{LexiconCounts, Polarity, SentimentResult};

use crate::analyzer::NormalizedText;
use crate::sentiment::lexicon::NegationMarkers;

/// Label and score chosen for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolarityDecision<'m> {
    /// Final label
    pub label: Polarity,
    /// Signed score
    pub score: i32,
    /// Negation marker that forced the label, if any
    pub negation: Option<&'m str>,
}

impl PolarityDecision<'_> {
    /// Converts into the public result type.
    #[inline]
    pub fn into_result(self) -> SentimentResult {
        SentimentResult::new(self.label, self.score)
    }
}

/// Turns lexicon counts into a label.
///
/// When any negation marker occurs in the text the label is always
/// [`Polarity::Negative`] with score `negative - positive`, even if the
/// positive count is larger (the score is then below zero). Without a
/// marker the larger count wins and the score is the absolute margin.
#[derive(Debug, Clone, Default)]
pub struct NegationAdjuster {
    markers: NegationMarkers,
}

impl NegationAdjuster {
    /// Creates an adjuster over `markers`.
    pub fn new(markers: NegationMarkers) -> Self {
        Self { markers }
    }

    /// The markers this adjuster looks for.
    #[inline(always)]
    pub fn markers(&self) -> &NegationMarkers {
        &self.markers
    }

    /// Decides label and score for `text` given its lexicon counts.
    pub fn adjust(&self, text: &NormalizedText, counts: LexiconCounts) -> PolarityDecision<'_> {
        if let Some(marker) = self.markers.find_in(text) {
            return PolarityDecision {
                label: Polarity::Negative,
                score: counts.negative_margin(),
                negation: Some(marker),
            };
        }

        let margin = counts.negative_margin();
        let label = match margin {
            m if m < 0 => Polarity::Positive,
            m if m > 0 => Polarity::Negative,
            _ => Polarity::Neutral,
        };

        PolarityDecision {
            label,
            score: margin.abs(),
            negation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::TextNormalizer;

    fn decide(input: &str, positive: u32, negative: u32) -> (Polarity, i32, Option<String>) {
        let adjuster = NegationAdjuster::default();
        let text = TextNormalizer::new().normalize(input);
        let d = adjuster.adjust(&text, LexiconCounts::new(positive, negative));
        (d.label, d.score, d.negation.map(str::to_owned))
    }

    #[test]
    fn positive_wins_without_negation() {
        assert_eq!(decide("puas senang", 2, 0), (Polarity::Positive, 2, None));
    }

    #[test]
    fn negative_wins_without_negation() {
        assert_eq!(decide("buruk", 1, 3), (Polarity::Negative, 2, None));
    }

    #[test]
    fn tie_is_neutral() {
        assert_eq!(decide("bagus tapi jelek", 1, 1), (Polarity::Neutral, 0, None));
        assert_eq!(decide("", 0, 0), (Polarity::Neutral, 0, None));
    }

    #[test]
    fn negation_forces_negative_even_when_positive_dominates() {
        assert_eq!(
            decide("tidak bagus dan tidak puas sekali", 3, 1),
            (Polarity::Negative, -2, Some("tidak".to_owned()))
        );
    }

    #[test]
    fn negation_with_equal_counts_scores_zero() {
        let (label, score, _) = decide("pelayanan tidak bagus tapi tidak jelek", 1, 1);
        assert_eq!((label, score), (Polarity::Negative, 0));
    }

    #[test]
    fn negation_with_negative_majority_keeps_positive_score() {
        assert_eq!(
            decide("jangan kesal", 0, 1),
            (Polarity::Negative, 1, Some("jangan".to_owned()))
        );
    }

    #[test]
    fn custom_markers() {
        let markers = NegationMarkers::new(["never"]).unwrap();
        let adjuster = NegationAdjuster::new(markers);
        let text = TextNormalizer::new().normalize("Never again");
        let d = adjuster.adjust(&text, LexiconCounts::new(1, 0));
        assert_eq!(d.label, Polarity::Negative);
        assert_eq!(d.into_result(), SentimentResult::new(Polarity::Negative, -1));
    }
}
