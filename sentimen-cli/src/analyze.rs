use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use sentimen_core::analyzer::TermFrequencies;
use sentimen_core::sentiment::Classification;
use sentimen_core::{
    FixedLanguage, LanguageDetector, LogSink, SentimentClassifier, SentimentPipeline,
    WhatlangDetector,
};
use sentimen_types::{AnalyzerConfig, LanguageTag, Polarity, Score};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze; read from stdin when omitted
    text: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show normalized text, matched terms and negation marker
    #[arg(long)]
    explain: bool,

    /// Show the N most frequent words (10 when N is omitted)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    terms: Option<Option<usize>>,

    /// Skip language detection and treat the text as TAG
    #[arg(long, value_name = "TAG")]
    language: Option<String>,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    text: &'a str,
    sentiment: Polarity,
    score: Score,
    language: &'a LanguageTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    explain: Option<Classification<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_terms: Option<Vec<(&'a str, u32)>>,
}

pub fn run(args: &AnalyzeArgs, config: &AnalyzerConfig, sink: &dyn LogSink) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => io::read_to_string(io::stdin()).context("failed to read text from stdin")?,
    };

    if text.trim().is_empty() {
        bail!("no text to analyze");
    }

    match &args.language {
        Some(tag) => {
            let detector = FixedLanguage(LanguageTag::new(tag.as_str()));
            analyze_with(detector, &text, args, config, sink)
        }
        None => {
            let detector = WhatlangDetector::from_config(config);
            analyze_with(detector, &text, args, config, sink)
        }
    }
}

fn analyze_with<D: LanguageDetector>(
    detector: D,
    text: &str,
    args: &AnalyzeArgs,
    config: &AnalyzerConfig,
    sink: &dyn LogSink,
) -> Result<()> {
    let mut frequencies = TermFrequencies::new();
    let pipeline = SentimentPipeline::new(detector, SentimentClassifier::default(), sink);
    let analysis = pipeline.analyze(text);
    if let Some(err) = &analysis.log_warning {
        eprintln!("warning: {err}");
    }

    let explain = (args.explain && analysis.result.is_classified())
        .then(|| pipeline.classifier().classify_detailed(text));

    let top_terms = match args.terms {
        Some(n) => {
            frequencies.add_text(text);
            Some(frequencies.top(n.unwrap_or(config.top_terms)))
        }
        None => None,
    };

    let report = AnalyzeReport {
        text,
        sentiment: analysis.result.label,
        score: analysis.result.score,
        language: &analysis.language,
        explain,
        top_terms,
    };

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer(&mut out, &report).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        write_plain(&mut out, &report)?;
    }

    Ok(())
}

fn write_plain(out: &mut impl Write, report: &AnalyzeReport<'_>) -> io::Result<()> {
    writeln!(out, "Sentiment: {}", report.sentiment)?;
    writeln!(out, "Score: {}", report.score)?;
    writeln!(out, "Language: {}", report.language)?;

    if let Some(c) = &report.explain {
        writeln!(out, "Normalized: {}", c.normalized)?;
        writeln!(out, "Positive terms: {}", join_or_dash(&c.matches.positive))?;
        writeln!(out, "Negative terms: {}", join_or_dash(&c.matches.negative))?;
        writeln!(out, "Negation: {}", c.negation.unwrap_or("-"))?;
    }

    if let Some(terms) = &report.top_terms {
        writeln!(out, "Top terms:")?;
        for (word, count) in terms {
            writeln!(out, "  {word} {count}")?;
        }
    }

    Ok(())
}

fn join_or_dash(terms: &[&str]) -> String {
    if terms.is_empty() {
        "-".to_owned()
    } else {
        terms.join(", ")
    }
}
