//! Term frequencies over normalized text.
//!
//! Feeds word-cloud style summaries: callers get the most frequent words
//! of a single text or of a whole column.

use rustc_hash::FxHashMap;

use crate::analyzer::normalizer::{NormalizedText, TextNormalizer};
use crate::analyzer::tokenizer::Tokenizer;

/// Word counts accumulated over one or more texts.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencies {
    counts: FxHashMap<String, u32>,
    total: u64,
    normalizer: TextNormalizer,
    buf: NormalizedText,
}

impl TermFrequencies {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the words of a raw text.
    pub fn add_text(&mut self, raw: &str) {
        self.normalizer.normalize_into(raw, &mut self.buf);
        let counts = &mut self.counts;
        let mut added = 0u64;
        Tokenizer::new().tokenize(&self.buf, |word, _| {
            match counts.get_mut(word) {
                Some(n) => *n = n.saturating_add(1),
                None => {
                    counts.insert(word.to_owned(), 1);
                }
            }
            added += 1;
        });
        self.total += added;
    }

    /// Counts the words of every text.
    pub fn add_all<I, T>(&mut self, texts: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for text in texts {
            self.add_text(text.as_ref());
        }
    }

    /// Count for one word (already normalized).
    #[must_use]
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of words counted, duplicates included.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns `true` if no word has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, by count descending then word ascending.
    pub fn top(&self, n: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}
