//! Positive/negative lexicons and negation markers.
//!
//! Both are immutable once built. The Indonesian defaults are returned by
//! [`Lexicon::indonesian`] and [`NegationMarkers::indonesian`]; custom data
//! goes through the validating constructors.

use rustc_hash::FxHashSet;
use sentimen_types::LexiconError;

use crate::analyzer::NormalizedText;

const POSITIVE_ID: &[&str] = &[
    "baik",
    "puas",
    "hebat",
    "bagus",
    "indah",
    "terima kasih",
    "senang",
    "suka",
    "luar biasa",
    "memuaskan",
    "ramah",
    "cepat",
    "mantap",
    "bagus sekali",
    "menyenangkan",
];

const NEGATIVE_ID: &[&str] = &[
    "buruk",
    "jelek",
    "kecewa",
    "benci",
    "sedih",
    "marah",
    "tidak puas",
    "payah",
    "mengecewakan",
    "parah",
    "lambat",
    "sombong",
    "melelahkan",
    "tidak ramah",
    "parah sekali",
    "gagal",
    "kesal",
];

const NEGATION_ID: &[&str] = &["tidak", "bukan", "kurang", "jangan", "gagal"];

/// Ordered set of lowercase terms.
///
/// Order is insertion order with duplicates removed, so iteration (and
/// therefore "first match") is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<Box<str>>,
}

impl TermSet {
    /// Builds a set, validating every term.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] for empty terms, terms with uppercase
    /// characters, or terms with leading/trailing whitespace.
    pub fn new<I, T>(terms: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();

        for term in terms {
            let term = term.as_ref();
            validate_term(term)?;
            if seen.insert(term.to_owned()) {
                out.push(Box::from(term));
            }
        }

        Ok(Self { terms: out })
    }

    fn from_trusted(terms: &[&str]) -> Self {
        Self {
            terms: terms.iter().map(|&t| Box::from(t)).collect(),
        }
    }

    /// Iterates the terms in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(|t| &**t)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the set has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns `true` if `term` is one of the entries.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.iter().any(|t| t == term)
    }
}

fn validate_term(term: &str) -> Result<(), LexiconError> {
    if term.is_empty() {
        return Err(LexiconError::Empty);
    }
    if term.trim() != term {
        return Err(LexiconError::Untrimmed {
            entry: term.to_owned(),
        });
    }
    if term.chars().any(char::is_uppercase) {
        return Err(LexiconError::Uppercase {
            entry: term.to_owned(),
        });
    }
    Ok(())
}

/// Positive and negative sentiment terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: TermSet,
    negative: TermSet,
}

impl Lexicon {
    /// Builds a lexicon from custom term lists.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if any term is invalid.
    pub fn new<P, N, T, U>(positive: P, negative: N) -> Result<Self, LexiconError>
    where
        P: IntoIterator<Item = T>,
        N: IntoIterator<Item = U>,
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Ok(Self {
            positive: TermSet::new(positive)?,
            negative: TermSet::new(negative)?,
        })
    }

    /// The built-in Bahasa Indonesia lexicon.
    pub fn indonesian() -> Self {
        Self {
            positive: TermSet::from_trusted(POSITIVE_ID),
            negative: TermSet::from_trusted(NEGATIVE_ID),
        }
    }

    /// Positive terms.
    #[inline(always)]
    pub fn positive(&self) -> &TermSet {
        &self.positive
    }

    /// Negative terms.
    #[inline(always)]
    pub fn negative(&self) -> &TermSet {
        &self.negative
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::indonesian()
    }
}

/// Words whose presence overrides the lexicon comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationMarkers {
    markers: TermSet,
}

impl NegationMarkers {
    /// Builds a marker set from custom words.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if any marker is invalid.
    pub fn new<I, T>(markers: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Ok(Self {
            markers: TermSet::new(markers)?,
        })
    }

    /// The built-in Bahasa Indonesia negation markers.
    pub fn indonesian() -> Self {
        Self {
            markers: TermSet::from_trusted(NEGATION_ID),
        }
    }

    /// The markers in order.
    #[inline(always)]
    pub fn terms(&self) -> &TermSet {
        &self.markers
    }

    /// First marker (in set order) occurring anywhere in `text`.
    ///
    /// Matching is substring containment, like the lexicon.
    pub fn find_in(&self, text: &NormalizedText) -> Option<&str> {
        let haystack = text.as_bytes();
        self.markers
            .iter()
            .find(|m| memchr::memmem::find(haystack, m.as_bytes()).is_some())
    }
}

impl Default for NegationMarkers {
    fn default() -> Self {
        Self::indonesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::TextNormalizer;

    #[test]
    fn builtin_data_satisfies_invariants() {
        for list in [POSITIVE_ID, NEGATIVE_ID, NEGATION_ID] {
            let set = TermSet::new(list.iter()).unwrap();
            assert_eq!(set.len(), list.len(), "built-in list has duplicates");
        }
    }

    #[test]
    fn builtin_sizes() {
        let lexicon = Lexicon::indonesian();
        assert_eq!(lexicon.positive().len(), 15);
        assert_eq!(lexicon.negative().len(), 17);
        assert_eq!(NegationMarkers::indonesian().terms().len(), 5);
        assert!(lexicon.positive().contains("terima kasih"));
        assert!(lexicon.negative().contains("gagal"));
    }

    #[test]
    fn rejects_uppercase() {
        let err = Lexicon::new(["Bagus"], ["jelek"]).unwrap_err();
        assert_eq!(
            err,
            LexiconError::Uppercase {
                entry: "Bagus".into()
            }
        );
    }

    #[test]
    fn rejects_untrimmed_and_empty() {
        assert!(matches!(
            NegationMarkers::new([" tidak"]),
            Err(LexiconError::Untrimmed { .. })
        ));
        assert_eq!(TermSet::new([""]), Err(LexiconError::Empty));
    }

    #[test]
    fn duplicates_collapse_in_first_seen_order() {
        let set = TermSet::new(["baik", "puas", "baik"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["baik", "puas"]);
    }

    #[test]
    fn multi_word_terms_allowed() {
        let lexicon = Lexicon::new(["luar biasa"], ["tidak puas"]).unwrap();
        assert!(lexicon.positive().contains("luar biasa"));
    }

    #[test]
    fn negation_found_as_substring() {
        let markers = NegationMarkers::indonesian();
        let normalizer = TextNormalizer::new();

        assert_eq!(markers.find_in(&normalizer.normalize("Tidak bagus")), Some("tidak"));
        assert_eq!(markers.find_in(&normalizer.normalize("bukannya")), Some("bukan"));
        assert_eq!(markers.find_in(&normalizer.normalize("bagus sekali")), None);
        assert_eq!(markers.find_in(&normalizer.normalize("")), None);
    }

    #[test]
    fn first_marker_in_set_order_wins() {
        let markers = NegationMarkers::indonesian();
        let text = TextNormalizer::new().normalize("jangan bilang tidak");
        assert_eq!(markers.find_in(&text), Some("tidak"));
    }
}
