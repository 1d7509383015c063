use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::iter;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use csv::StringRecord;
use serde::Serialize;
use tracing::info;

use sentimen_core::analyzer::TermFrequencies;
use sentimen_core::{FixedLanguage, LogSink, SentimentClassifier, SentimentPipeline};
use sentimen_types::{AnalyzerConfig, LanguageTag, Polarity, Score, SentimentResult};

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file with a header row
    file: PathBuf,

    /// Column holding the texts to analyze
    #[arg(short, long)]
    column: String,

    /// Write the annotated table to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print one JSON object per row instead of CSV
    #[arg(long)]
    json: bool,

    /// Print the N most frequent words of the column (10 when N is omitted)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    terms: Option<Option<usize>>,
}

#[derive(Serialize)]
struct BatchRow<'a> {
    row: usize,
    text: &'a str,
    sentiment: Polarity,
    sentiment_score: Score,
}

pub fn run(args: &BatchArgs, config: &AnalyzerConfig, sink: &dyn LogSink) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", args.file.display()))?
        .clone();

    let index = headers
        .iter()
        .position(|h| h == args.column)
        .ok_or_else(|| {
            anyhow!(
                "column '{}' not found; available columns: {}",
                args.column,
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    info!(rows = records.len(), column = %args.column, "loaded table");

    let pipeline = SentimentPipeline::new(
        FixedLanguage(LanguageTag::INDONESIAN),
        SentimentClassifier::default(),
        sink,
    );
    let report = pipeline.analyze_column(records.iter().map(|r| r.get(index)));

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if args.json {
        write_json(out, &records, index, &report.results)?;
    } else {
        write_csv(out, &headers, &records, &report.results)?;
    }

    eprintln!("{}", report.summary);
    if let Some(err) = &report.last_log_error {
        eprintln!(
            "warning: {} of {} log entries not written: {err}",
            report.log_failures, report.summary.total
        );
    }
    for (label, count) in report.summary.distribution() {
        eprintln!("  {label}: {count}");
    }

    if let Some(n) = args.terms {
        let mut frequencies = TermFrequencies::new();
        frequencies.add_all(records.iter().filter_map(|r| r.get(index)));
        eprintln!("Top terms:");
        for (word, count) in frequencies.top(n.unwrap_or(config.top_terms)) {
            eprintln!("  {word} {count}");
        }
    }

    Ok(())
}

fn write_csv(
    out: impl Write,
    headers: &StringRecord,
    records: &[StringRecord],
    results: &[SentimentResult],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
    writer.write_record(headers.iter().chain(["sentiment", "sentiment_score"]))?;

    for (record, result) in records.iter().zip(results) {
        let pad = headers.len().saturating_sub(record.len());
        let score = result.score.to_string();
        writer.write_record(
            record
                .iter()
                .chain(iter::repeat("").take(pad))
                .chain([result.label.as_str(), score.as_str()]),
        )?;
    }

    writer.flush().context("failed to write table")?;
    Ok(())
}

fn write_json(
    mut out: impl Write,
    records: &[StringRecord],
    index: usize,
    results: &[SentimentResult],
) -> Result<()> {
    for (row, (record, result)) in records.iter().zip(results).enumerate() {
        let line = BatchRow {
            row,
            text: record.get(index).unwrap_or(""),
            sentiment: result.label,
            sentiment_score: result.score,
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }

    out.flush().context("failed to write results")?;
    Ok(())
}
