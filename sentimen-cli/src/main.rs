//! Sentimen CLI
//!
//! # Commands
//!
//! - `analyze`: classify one text (argument or stdin)
//! - `batch`: classify one column of a CSV file
//!
//! Every analyzed text is appended to a CSV log unless `--no-log` is given.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use sentimen_core::{CsvLogSink, LogSink, NoopLogSink};
use sentimen_types::AnalyzerConfig;

mod analyze;
mod batch;

/// Sentiment analysis for Bahasa Indonesia
#[derive(Parser)]
#[command(name = "sentimen")]
#[command(version)]
#[command(about = "Keyword-and-negation sentiment analysis for Bahasa Indonesia")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Analysis log file
    #[arg(
        long,
        value_name = "PATH",
        env = "SENTIMEN_LOG_FILE",
        default_value = CsvLogSink::DEFAULT_PATH,
        global = true
    )]
    log_file: PathBuf,

    /// Do not write the analysis log
    #[arg(long, global = true)]
    no_log: bool,

    /// Minimum language detection confidence (0.0-1.0)
    #[arg(
        long,
        value_name = "F",
        env = "SENTIMEN_MIN_CONFIDENCE",
        default_value_t = 0.0,
        global = true
    )]
    min_confidence: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one text
    ///
    /// Only Indonesian text is classified; anything else is reported as
    /// "Tidak Diketahui" with score N/A.
    Analyze(analyze::AnalyzeArgs),
    /// Analyze one column of a CSV file
    ///
    /// Every row is classified as Indonesian. The table is written back
    /// with `sentiment` and `sentiment_score` columns appended.
    Batch(batch::BatchArgs),
}

impl Cli {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default().with_min_detection_confidence(self.min_confidence)
    }

    fn log_sink(&self) -> Box<dyn LogSink> {
        if self.no_log {
            Box::new(NoopLogSink)
        } else {
            Box::new(CsvLogSink::new(&self.log_file))
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let sink = cli.log_sink();

    match &cli.command {
        Commands::Analyze(args) => analyze::run(args, &config, &*sink),
        Commands::Batch(args) => batch::run(args, &config, &*sink),
    }
}
