//! End-to-end analysis: language gate, classifier, log.

use tracing::{info, warn};

use sentimen_types::{LanguageTag, SentimentResult};

use crate::language::{LanguageDetector, LanguageGate};
use crate::log::{AnalysisLogEntry, LogError, LogSink};
use crate::sentiment::{BatchSummary, LexiconScorer, SentimentClassifier, SubstringScorer};

/// Outcome of [`SentimentPipeline::analyze`].
#[derive(Debug)]
pub struct Analysis {
    /// Classification, or the unknown sentinel for non-Indonesian text
    pub result: SentimentResult,
    /// Language reported by the gate
    pub language: LanguageTag,
    /// Set when the log entry could not be written
    pub log_warning: Option<LogError>,
}

/// Outcome of [`SentimentPipeline::analyze_column`].
#[derive(Debug)]
pub struct BatchReport {
    /// One result per input row, in input order
    pub results: Vec<SentimentResult>,
    /// Label distribution of `results`
    pub summary: BatchSummary,
    /// Rows whose log entry could not be written
    pub log_failures: usize,
    /// Last log error encountered
    pub last_log_error: Option<LogError>,
}

/// Language gate, classifier and log sink wired together.
///
/// Single texts are gated by language: only Indonesian reaches the
/// classifier. Columns skip the gate and every row is classified and
/// logged as Indonesian. Log failures never change a result.
#[derive(Debug)]
pub struct SentimentPipeline<D, L, S = SubstringScorer> {
    gate: LanguageGate<D>,
    classifier: SentimentClassifier<S>,
    sink: L,
}

impl<D, L, S> SentimentPipeline<D, L, S>
where
    D: LanguageDetector,
    L: LogSink,
    S: LexiconScorer,
{
    /// Assembles a pipeline.
    pub fn new(detector: D, classifier: SentimentClassifier<S>, sink: L) -> Self {
        Self {
            gate: LanguageGate::new(detector),
            classifier,
            sink,
        }
    }

    /// The classifier used for Indonesian text.
    #[inline(always)]
    pub fn classifier(&self) -> &SentimentClassifier<S> {
        &self.classifier
    }

    /// The log sink.
    #[inline(always)]
    pub fn sink(&self) -> &L {
        &self.sink
    }

    /// Analyzes one raw text.
    pub fn analyze(&self, raw: &str) -> Analysis {
        let language = self.gate.detect_language(raw);
        let result = if language.is_indonesian() {
            self.classifier.classify(raw)
        } else {
            SentimentResult::unknown()
        };

        info!(language = %language, label = %result.label, score = %result.score, "analyzed text");

        let entry = AnalysisLogEntry::now(raw, result, language.clone());
        let log_warning = self.sink.append(&entry).err();
        if let Some(err) = &log_warning {
            warn!(error = %err, "failed to write analysis log");
        }

        Analysis {
            result,
            language,
            log_warning,
        }
    }

    /// Analyzes a column of raw texts.
    ///
    /// Missing values are treated as empty strings.
    pub fn analyze_column<I, T>(&self, rows: I) -> BatchReport
    where
        I: IntoIterator<Item = Option<T>>,
        T: AsRef<str>,
    {
        let rows: Vec<Option<T>> = rows.into_iter().collect();
        let results = self.classifier.classify_batch(rows.iter().map(Option::as_ref));

        let mut log_failures = 0usize;
        let mut last_log_error = None;
        for (row, result) in rows.iter().zip(&results) {
            let input = row.as_ref().map_or("", |r| r.as_ref());
            let entry = AnalysisLogEntry::now(input, *result, LanguageTag::INDONESIAN);
            if let Err(err) = self.sink.append(&entry) {
                log_failures += 1;
                last_log_error = Some(err);
            }
        }

        if let Some(err) = &last_log_error {
            warn!(failures = log_failures, error = %err, "failed to write analysis log");
        }

        let summary = BatchSummary::from_results(&results);
        info!(%summary, "analyzed column");

        BatchReport {
            results,
            summary,
            log_failures,
            last_log_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::NormalizedText;
    use crate::language::FixedLanguage;
    use crate::log::NoopLogSink;
    use crate::sentiment::{Lexicon, LexiconMatches, NegationMarkers};
    use core::cell::{Cell, RefCell};
    use sentimen_types::{DetectionError, Polarity};

    #[derive(Default)]
    struct MemorySink {
        entries: RefCell<Vec<AnalysisLogEntry>>,
    }

    impl LogSink for MemorySink {
        fn append(&self, entry: &AnalysisLogEntry) -> Result<(), LogError> {
            self.entries.borrow_mut().push(entry.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl LogSink for FailingSink {
        fn append(&self, _entry: &AnalysisLogEntry) -> Result<(), LogError> {
            Err(LogError::Io {
                path: "log.csv".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[derive(Default)]
    struct CountingScorer {
        calls: Cell<usize>,
    }

    impl LexiconScorer for CountingScorer {
        fn matches<'l>(&self, text: &NormalizedText, lexicon: &'l Lexicon) -> LexiconMatches<'l> {
            self.calls.set(self.calls.get() + 1);
            SubstringScorer.matches(text, lexicon)
        }
    }

    fn indonesian() -> FixedLanguage {
        FixedLanguage(LanguageTag::INDONESIAN)
    }

    #[test]
    fn indonesian_text_is_classified_and_logged() {
        let pipeline = SentimentPipeline::new(
            indonesian(),
            SentimentClassifier::default(),
            MemorySink::default(),
        );
        let analysis = pipeline.analyze("Saya sangat puas dan senang dengan pelayanan ini");

        assert_eq!(analysis.result, SentimentResult::new(Polarity::Positive, 2));
        assert!(analysis.language.is_indonesian());
        assert!(analysis.log_warning.is_none());

        let entries = pipeline.sink().entries.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].input, "Saya sangat puas dan senang dengan pelayanan ini");
        assert_eq!(entries[0].result, analysis.result);
        assert_eq!(entries[0].language, LanguageTag::INDONESIAN);
    }

    #[test]
    fn non_indonesian_bypasses_scorer() {
        let classifier = SentimentClassifier::with_scorer(
            Lexicon::indonesian(),
            NegationMarkers::indonesian(),
            CountingScorer::default(),
        );
        let pipeline = SentimentPipeline::new(
            FixedLanguage(LanguageTag::new("en")),
            classifier,
            MemorySink::default(),
        );

        let analysis = pipeline.analyze("this service is great");
        assert_eq!(analysis.result, SentimentResult::unknown());
        assert_eq!(analysis.language.as_str(), "en");
        assert_eq!(pipeline.classifier().scorer().calls.get(), 0);

        let entries = pipeline.sink().entries.borrow();
        assert_eq!(entries[0].result, SentimentResult::unknown());
    }

    #[test]
    fn detection_failure_yields_unknown() {
        let detector =
            |_: &str| -> Result<LanguageTag, DetectionError> { Err(DetectionError::NoSignal) };
        let pipeline = SentimentPipeline::new(detector, SentimentClassifier::default(), NoopLogSink);

        let analysis = pipeline.analyze("bagus");
        assert_eq!(analysis.result, SentimentResult::unknown());
        assert!(analysis.language.is_unknown());
    }

    #[test]
    fn empty_text_is_unknown() {
        let pipeline = SentimentPipeline::new(indonesian(), SentimentClassifier::default(), NoopLogSink);
        let analysis = pipeline.analyze("   ");
        assert_eq!(analysis.result, SentimentResult::unknown());
    }

    #[test]
    fn log_failure_is_a_warning_not_an_error() {
        let pipeline = SentimentPipeline::new(indonesian(), SentimentClassifier::default(), FailingSink);
        let analysis = pipeline.analyze("jelek");

        assert_eq!(analysis.result, SentimentResult::new(Polarity::Negative, 1));
        assert!(matches!(analysis.log_warning, Some(LogError::Io { .. })));
    }

    #[test]
    fn column_keeps_order_and_logs_every_row_as_indonesian() {
        let pipeline = SentimentPipeline::new(
            FixedLanguage(LanguageTag::new("en")),
            SentimentClassifier::default(),
            MemorySink::default(),
        );
        let rows = vec![Some("bagus".to_owned()), None, Some("tidak puas".to_owned())];
        let report = pipeline.analyze_column(rows);

        assert_eq!(
            report.results,
            vec![
                SentimentResult::new(Polarity::Positive, 1),
                SentimentResult::neutral(),
                SentimentResult::new(Polarity::Negative, 0),
            ]
        );
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.negative, 1);
        assert_eq!(report.log_failures, 0);

        let entries = pipeline.sink().entries.borrow();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].input, "");
        assert!(entries.iter().all(|e| e.language.is_indonesian()));
    }

    #[test]
    fn column_counts_log_failures() {
        let pipeline = SentimentPipeline::new(indonesian(), SentimentClassifier::default(), FailingSink);
        let report = pipeline.analyze_column([Some("a"), Some("b")]);

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.log_failures, 2);
        assert!(report.last_log_error.is_some());
    }
}
