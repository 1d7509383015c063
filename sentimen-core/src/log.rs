//! Append-only analysis log.
//!
//! Every analyzed text produces one [`AnalysisLogEntry`]. Sinks are best
//! effort: the pipeline reports their failures as warnings and never lets
//! them change a result.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use sentimen_types::{LanguageTag, SentimentResult};

/// Timestamp format of the CSV log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One analyzed text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisLogEntry {
    /// When the analysis finished
    pub timestamp: DateTime<Local>,
    /// Raw input text
    pub input: String,
    /// Analysis outcome
    pub result: SentimentResult,
    /// Detected (or assumed) language
    pub language: LanguageTag,
}

impl AnalysisLogEntry {
    /// Creates an entry stamped with the current local time.
    pub fn now(input: impl Into<String>, result: SentimentResult, language: LanguageTag) -> Self {
        Self {
            timestamp: Local::now(),
            input: input.into(),
            result,
            language,
        }
    }

    /// CSV fields in column order: timestamp, input, sentiment, score, language.
    pub fn to_record(&self) -> [String; 5] {
        [
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.input.clone(),
            self.result.label.to_string(),
            self.result.score.to_string(),
            self.language.to_string(),
        ]
    }
}

/// Errors writing the analysis log.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened or flushed.
    #[error("cannot write log file {}: {source}", path.display())]
    Io {
        /// Log file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The record could not be encoded.
    #[error("cannot encode log record: {0}")]
    Csv(#[from] csv::Error),
}

/// Destination for log entries.
pub trait LogSink {
    /// Appends one entry.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] if the entry could not be persisted.
    fn append(&self, entry: &AnalysisLogEntry) -> Result<(), LogError>;
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn append(&self, entry: &AnalysisLogEntry) -> Result<(), LogError> {
        (**self).append(entry)
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn append(&self, entry: &AnalysisLogEntry) -> Result<(), LogError> {
        (**self).append(entry)
    }
}

/// Appends headerless CSV records to a file.
///
/// The file is opened (and created if missing) for every entry, so the log
/// survives crashes between entries and can be rotated externally.
#[derive(Debug, Clone)]
pub struct CsvLogSink {
    path: PathBuf,
}

impl CsvLogSink {
    /// Default log file name.
    pub const DEFAULT_PATH: &'static str = "user_analysis_log.csv";

    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> LogError {
        LogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LogSink for CsvLogSink {
    fn append(&self, entry: &AnalysisLogEntry) -> Result<(), LogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(entry.to_record())?;
        writer.flush().map_err(|e| self.io_error(e))
    }
}

/// Discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn append(&self, _entry: &AnalysisLogEntry) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sentimen_types::Polarity;
    use tempfile::tempdir;

    fn entry(input: &str, result: SentimentResult, language: LanguageTag) -> AnalysisLogEntry {
        AnalysisLogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 5).unwrap(),
            input: input.to_owned(),
            result,
            language,
        }
    }

    #[test]
    fn record_fields() {
        let e = entry(
            "Bagus!",
            SentimentResult::new(Polarity::Positive, 1),
            LanguageTag::INDONESIAN,
        );
        assert_eq!(
            e.to_record(),
            ["2024-05-17 09:30:05", "Bagus!", "Positif", "1", "id"]
        );

        let e = entry("hello", SentimentResult::unknown(), LanguageTag::new("en"));
        assert_eq!(e.to_record()[2..], ["Tidak Diketahui", "N/A", "en"]);
    }

    #[test]
    fn csv_sink_appends_without_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let sink = CsvLogSink::new(&path);

        sink.append(&entry(
            "bagus, sekali",
            SentimentResult::new(Polarity::Positive, 2),
            LanguageTag::INDONESIAN,
        ))
        .unwrap();
        sink.append(&entry("", SentimentResult::unknown(), LanguageTag::UNKNOWN))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            [
                "2024-05-17 09:30:05,\"bagus, sekali\",Positif,2,id",
                "2024-05-17 09:30:05,,Tidak Diketahui,N/A,unknown",
            ]
        );
    }

    #[test]
    fn csv_sink_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let sink = CsvLogSink::new(dir.path().join("missing").join("log.csv"));
        let err = sink
            .append(&entry("x", SentimentResult::neutral(), LanguageTag::INDONESIAN))
            .unwrap_err();
        assert!(matches!(err, LogError::Io { .. }));
        assert!(err.to_string().contains("log.csv"));
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let sink: Box<dyn LogSink> = Box::new(NoopLogSink);
        assert!(sink
            .append(&entry("x", SentimentResult::neutral(), LanguageTag::INDONESIAN))
            .is_ok());
    }
}
