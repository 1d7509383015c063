//! Language identification.
//!
//! [`LanguageGate`] decides whether a text goes to the classifier. It wraps a
//! [`LanguageDetector`] and never fails: empty input and every detector error
//! end up as [`LanguageTag::UNKNOWN`].

use tracing::{debug, warn};
use whatlang::Lang;

use sentimen_types::{AnalyzerConfig, DetectionError, LanguageTag};

/// Something that can name the language of a text.
pub trait LanguageDetector {
    /// Detects the language of raw (not normalized) text.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError`] when no language can be determined.
    fn detect(&self, text: &str) -> Result<LanguageTag, DetectionError>;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Result<LanguageTag, DetectionError>,
{
    fn detect(&self, text: &str) -> Result<LanguageTag, DetectionError> {
        self(text)
    }
}

/// Trigram-based detection backed by `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl WhatlangDetector {
    /// Creates a detector that accepts any confidence.
    pub const fn new() -> Self {
        Self {
            min_confidence: 0.0,
        }
    }

    /// Creates a detector using the configured confidence threshold.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            min_confidence: config.min_detection_confidence,
        }
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<LanguageTag, DetectionError> {
        let info = whatlang::detect(text).ok_or(DetectionError::NoSignal)?;
        let language = tag_for(info.lang());
        let confidence = info.confidence();

        if confidence < self.min_confidence {
            return Err(DetectionError::LowConfidence {
                language,
                confidence,
                threshold: self.min_confidence,
            });
        }

        Ok(language)
    }
}

/// ISO 639-1 code of every language that has one, the detector's ISO 639-3
/// code otherwise.
fn tag_for(lang: Lang) -> LanguageTag {
    let code = match lang {
        Lang::Afr => "af",
        Lang::Aka => "ak",
        Lang::Amh => "am",
        Lang::Ara => "ar",
        Lang::Aze => "az",
        Lang::Bel => "be",
        Lang::Ben => "bn",
        Lang::Bul => "bg",
        Lang::Cat => "ca",
        Lang::Ces => "cs",
        Lang::Cmn => "zh",
        Lang::Dan => "da",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Eng => "en",
        Lang::Epo => "eo",
        Lang::Est => "et",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hrv => "hr",
        Lang::Hun => "hu",
        Lang::Hye => "hy",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jav => "jv",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kat => "ka",
        Lang::Khm => "km",
        Lang::Kor => "ko",
        Lang::Lat => "la",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Mkd => "mk",
        Lang::Mya => "my",
        Lang::Nep => "ne",
        Lang::Nld => "nl",
        Lang::Nob => "nb",
        Lang::Ori => "or",
        Lang::Pan => "pa",
        Lang::Pes => "fa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Sin => "si",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Sna => "sn",
        Lang::Spa => "es",
        Lang::Srp => "sr",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tgl => "tl",
        Lang::Tha => "th",
        Lang::Tuk => "tk",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Uzb => "uz",
        Lang::Vie => "vi",
        Lang::Yid => "yi",
        Lang::Zul => "zu",
        #[allow(unreachable_patterns)]
        other => other.code(),
    };
    LanguageTag::from_static(code)
}

/// Detector that always answers with the same tag.
///
/// Used when the caller already knows the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub LanguageTag);

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> Result<LanguageTag, DetectionError> {
        Ok(self.0.clone())
    }
}

/// Infallible front for a [`LanguageDetector`].
#[derive(Debug, Clone, Default)]
pub struct LanguageGate<D> {
    detector: D,
}

impl<D: LanguageDetector> LanguageGate<D> {
    /// Wraps a detector.
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// Language of raw text, or [`LanguageTag::UNKNOWN`].
    ///
    /// Whitespace-only input short-circuits without calling the detector.
    /// Detector failures are logged at `warn` and mapped to unknown.
    pub fn detect_language(&self, raw: &str) -> LanguageTag {
        if raw.trim().is_empty() {
            return LanguageTag::UNKNOWN;
        }

        match self.detector.detect(raw) {
            Ok(tag) => {
                debug!(language = %tag, "detected language");
                tag
            }
            Err(err) => {
                warn!(error = %err, "language detection failed");
                LanguageTag::UNKNOWN
            }
        }
    }

    /// Returns `true` if `raw` should go to the Indonesian classifier.
    pub fn admits(&self, raw: &str) -> bool {
        self.detect_language(raw).is_indonesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn empty_input_skips_detector() {
        let calls = Cell::new(0usize);
        let detector = |_: &str| -> Result<LanguageTag, DetectionError> {
            calls.set(calls.get() + 1);
            Ok(LanguageTag::INDONESIAN)
        };
        let gate = LanguageGate::new(detector);

        assert!(gate.detect_language("").is_unknown());
        assert!(gate.detect_language(" \t\n ").is_unknown());
        assert_eq!(calls.get(), 0);

        assert!(gate.detect_language("bagus").is_indonesian());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn detector_errors_become_unknown() {
        let gate = LanguageGate::new(|_: &str| -> Result<LanguageTag, DetectionError> {
            Err(DetectionError::NoSignal)
        });
        assert_eq!(gate.detect_language("12345"), LanguageTag::UNKNOWN);

        let gate = LanguageGate::new(|_: &str| -> Result<LanguageTag, DetectionError> {
            Err(DetectionError::Backend("boom".into()))
        });
        assert!(!gate.admits("apa saja"));
    }

    #[test]
    fn fixed_language() {
        let gate = LanguageGate::new(FixedLanguage(LanguageTag::new("en")));
        assert_eq!(gate.detect_language("bagus").as_str(), "en");
        assert!(gate.detect_language("  ").is_unknown());
    }

    #[test]
    fn whatlang_detects_indonesian() {
        let gate = LanguageGate::new(WhatlangDetector::new());
        let tag = gate.detect_language(
            "Saya sangat puas dengan pelayanan ini karena pengemudinya datang dengan \
             cepat dan sangat ramah kepada semua penumpang yang ada di dalam mobil",
        );
        assert!(tag.is_indonesian(), "got {tag}");
    }

    #[test]
    fn whatlang_detects_english() {
        let gate = LanguageGate::new(WhatlangDetector::new());
        let tag = gate.detect_language(
            "This service is great and the driver was very friendly and polite to \
             everyone who was riding in the car with me today",
        );
        assert_eq!(tag.as_str(), "en");
    }

    #[test]
    fn whatlang_without_letters_is_unknown() {
        let gate = LanguageGate::new(WhatlangDetector::new());
        assert!(gate.detect_language("12345 !!! ???").is_unknown());
    }

    #[test]
    fn confidence_threshold_rejects() {
        let detector = WhatlangDetector { min_confidence: 2.0 };
        match detector.detect("Saya sangat puas dengan pelayanan ini") {
            Err(DetectionError::LowConfidence { threshold, .. }) => assert_eq!(threshold, 2.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn tags_use_two_letter_codes() {
        assert_eq!(tag_for(Lang::Ind).as_str(), "id");
        assert_eq!(tag_for(Lang::Est).as_str(), "et");
        assert_eq!(tag_for(Lang::Tgl).as_str(), "tl");
        assert_eq!(tag_for(Lang::Slv).as_str(), "sl");
        assert_eq!(tag_for(Lang::Pes).as_str(), "fa");
    }

    #[test]
    fn threshold_comes_from_config() {
        let config = AnalyzerConfig::default().with_min_detection_confidence(0.4);
        assert_eq!(WhatlangDetector::from_config(&config).min_confidence, 0.4);
    }
}
