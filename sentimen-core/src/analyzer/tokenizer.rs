//! Streaming tokenizer.
//!
//! Splits normalized text into words. Given `"sangat puas sekali"` it emits
//!
//! ```ignore
//! ("sangat", 0)
//! ("puas", 1)
//! ("sekali", 2)
//! ```
//!
//! Tokens are slices of the input and are delivered through a callback, so
//! no intermediate collection is built.
//!
//! ## The Input Contract
//!
//! The tokenizer expects text produced by
//! [`TextNormalizer`](crate::analyzer::TextNormalizer): lowercase, no
//! leading or trailing space, no consecutive spaces. Taking
//! [`NormalizedText`] enforces this at the type level.

use memchr::memchr_iter;

use crate::analyzer::normalizer::NormalizedText;

/// Streaming tokenizer - splits normalized text on single spaces.
///
/// ## Example
///
/// ```
/// use sentimen_core::analyzer::{TextNormalizer, Tokenizer};
///
/// let text = TextNormalizer::new().normalize("Sangat puas, sekali!");
/// let mut words = Vec::new();
/// Tokenizer::new().tokenize(&text, |word, _| words.push(word));
///
/// assert_eq!(words, ["sangat", "puas", "sekali"]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(word, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n NormalizedText, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let text = normalized.as_str();
        if text.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', text.as_bytes()) {
            if start < i {
                // ASCII space is never a continuation byte, so `i` is a char boundary.
                emit(&text[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < text.len() {
            emit(&text[start..], pos);
        }
    }
}
