use core::fmt;
use core::ops::Deref;

/// Text that went through [`TextNormalizer`].
///
/// Guarantees:
/// - only word characters (alphanumeric or `_`) and single ASCII spaces
/// - no leading or trailing space
/// - lowercase
///
/// The only way to obtain a value is through the normalizer, so every
/// scoring stage can rely on these invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Creates an empty buffer for [`TextNormalizer::normalize_into`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self(String::with_capacity(capacity))
    }

    /// Returns the normalized text.
    #[inline(always)]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if nothing survived normalization.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Capacity of the underlying buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text normalizer for lexicon matching.
///
/// Performs the following operations:
/// - Removes every character that is not alphanumeric, `_` or whitespace
/// - Collapses each run of whitespace into a single space
/// - Removes leading/trailing whitespace
/// - Converts all characters to lowercase (Unicode-aware)
///
/// Punctuation is removed before whitespace is collapsed, so `"a , b"`
/// becomes `"a b"`. A lowercase mapping that expands into a non-word
/// character (the combining dot of `İ`) drops that character, which keeps
/// normalization idempotent.
///
/// # Examples
///
/// ```
/// use sentimen_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  Sangat   BAGUS!!! ").as_str(), "sangat bagus");
/// assert_eq!(normalizer.normalize("terima-kasih :)").as_str(), "terimakasih");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut NormalizedText) {
        let buf = &mut out.0;
        buf.clear();
        buf.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;
        let mut pending_space = false;

        while i < bytes.len() {
            let b = bytes[i];

            if b < 128 {
                i += 1;
                if is_ascii_word(b) {
                    push_space_if_pending(buf, &mut pending_space);
                    buf.push(b.to_ascii_lowercase() as char);
                } else if is_ascii_space(b) {
                    pending_space = true;
                }
                continue;
            }

            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            if is_space(ch) {
                pending_space = true;
            } else if ch.is_alphanumeric() {
                for lowered in ch.to_lowercase() {
                    if is_word(lowered) {
                        push_space_if_pending(buf, &mut pending_space);
                        buf.push(lowered);
                    }
                }
            }
        }
    }

    /// Normalizes text and returns a new [`NormalizedText`].
    #[inline]
    pub fn normalize(&self, input: &str) -> NormalizedText {
        let mut out = NormalizedText::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[inline(always)]
fn push_space_if_pending(buf: &mut String, pending_space: &mut bool) {
    if *pending_space && !buf.is_empty() {
        buf.push(' ');
    }
    *pending_space = false;
}

#[inline(always)]
fn is_ascii_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// ASCII whitespace, including the information separators 0x1C-0x1F.
#[inline(always)]
fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | 0x1C..=0x1F)
}

#[inline(always)]
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

#[inline(always)]
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
