//! Label distribution of a batch.

use serde::Serialize;
use sentimen_types::{Polarity, SentimentResult};

/// Count of results per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Number of results.
    pub total: usize,
    /// Results labeled positive.
    pub positive: usize,
    /// Results labeled negative.
    pub negative: usize,
    /// Results labeled neutral.
    pub neutral: usize,
    /// Results that were not classified.
    pub unknown: usize,
}

impl BatchSummary {
    /// Summarizes a slice of results.
    pub fn from_results(results: &[SentimentResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    /// Adds one result.
    pub fn record(&mut self, result: &SentimentResult) {
        self.total += 1;
        match result.label {
            Polarity::Positive => self.positive += 1,
            Polarity::Negative => self.negative += 1,
            Polarity::Neutral => self.neutral += 1,
            Polarity::Unknown => self.unknown += 1,
        }
    }

    /// Count for one label.
    #[must_use]
    pub fn count(&self, label: Polarity) -> usize {
        match label {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
            Polarity::Neutral => self.neutral,
            Polarity::Unknown => self.unknown,
        }
    }

    /// `(label, count)` pairs sorted by count descending, zero counts omitted.
    ///
    /// Ties keep [`Polarity::ALL`] order.
    pub fn distribution(&self) -> Vec<(Polarity, usize)> {
        let mut out: Vec<_> = Polarity::ALL
            .iter()
            .map(|&label| (label, self.count(label)))
            .filter(|&(_, n)| n > 0)
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

impl core::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} texts: {} positive, {} negative, {} neutral",
            self.total, self.positive, self.negative, self.neutral
        )?;

        if self.unknown > 0 {
            write!(f, ", {} unknown", self.unknown)?;
        }

        Ok(())
    }
}
