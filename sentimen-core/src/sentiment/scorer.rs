//! Lexicon scoring.

use memchr::memmem;
use serde::Serialize;
use smallvec::SmallVec;

use sentimen_types::LexiconCounts;

use crate::analyzer::NormalizedText;
use crate::sentiment::lexicon::{Lexicon, TermSet};

/// Lexicon entries found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LexiconMatches<'l> {
    /// Positive entries found, in lexicon order
    pub positive: SmallVec<[&'l str; 8]>,
    /// Negative entries found, in lexicon order
    pub negative: SmallVec<[&'l str; 8]>,
}

impl LexiconMatches<'_> {
    /// Hit counts.
    #[must_use]
    pub fn counts(&self) -> LexiconCounts {
        LexiconCounts::new(self.positive.len() as u32, self.negative.len() as u32)
    }
}

/// Counts lexicon hits in normalized text.
///
/// Each entry contributes at most one hit however many times it occurs.
pub trait LexiconScorer {
    /// Entries of `lexicon` present in `text`.
    fn matches<'l>(&self, text: &NormalizedText, lexicon: &'l Lexicon) -> LexiconMatches<'l>;

    /// Hit counts for `text`.
    fn score(&self, text: &NormalizedText, lexicon: &Lexicon) -> LexiconCounts {
        self.matches(text, lexicon).counts()
    }
}

/// Plain substring containment.
///
/// Not token-aware: `"puas"` matches inside `"kepuasan"` and `"baik"`
/// inside `"sebaiknya"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringScorer;

impl SubstringScorer {
    #[inline]
    fn hits<'l>(haystack: &[u8], terms: &'l TermSet) -> SmallVec<[&'l str; 8]> {
        terms
            .iter()
            .filter(|t| memmem::find(haystack, t.as_bytes()).is_some())
            .collect()
    }
}

impl LexiconScorer for SubstringScorer {
    fn matches<'l>(&self, text: &NormalizedText, lexicon: &'l Lexicon) -> LexiconMatches<'l> {
        let haystack = text.as_bytes();
        LexiconMatches {
            positive: Self::hits(haystack, lexicon.positive()),
            negative: Self::hits(haystack, lexicon.negative()),
        }
    }

    fn score(&self, text: &NormalizedText, lexicon: &Lexicon) -> LexiconCounts {
        let haystack = text.as_bytes();
        LexiconCounts::new(
            Self::hits(haystack, lexicon.positive()).len() as u32,
            Self::hits(haystack, lexicon.negative()).len() as u32,
        )
    }
}
