// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands and their flags:
//
//   sample-stanford-imdb   build train/dev/test split files
//   analyze-stanford-imdb  print vocabulary statistics
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::analyze_use_case::AnalyzeConfig;
use crate::application::sample_use_case::SampleConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the Stanford movie review corpus and write sampled
    /// train/dev/test split files
    #[command(name = "sample-stanford-imdb")]
    Sample(SampleArgs),

    /// Print the word and markup vocabularies of the split files
    #[command(name = "analyze-stanford-imdb")]
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of training reviews
    #[arg(long, default_value_t = 5000)]
    pub train_size: usize,

    /// Number of dev (validation) reviews, drawn from the
    /// training population but disjoint from the training sample
    #[arg(long, default_value_t = 1000)]
    pub dev_size: usize,

    /// Number of test reviews
    #[arg(long, default_value_t = 5000)]
    pub test_size: usize,

    /// Use a local copy of the corpus archive instead of downloading
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Keep the temp working directory after the run
    #[arg(long)]
    pub keep_temp: bool,
}

/// Convert CLI SampleArgs into the application-layer SampleConfig.
/// The application layer never sees clap types.
impl From<&SampleArgs> for SampleConfig {
    fn from(a: &SampleArgs) -> Self {
        SampleConfig {
            train_size: a.train_size,
            dev_size:   a.dev_size,
            test_size:  a.test_size,
            keep_temp:  a.keep_temp,
        }
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Extra regex for markup that should count as whitespace
    /// (repeatable; `<br\s*/?>` is always included)
    #[arg(long = "whitespace-markup", value_name = "REGEX")]
    pub whitespace_markups: Vec<String>,

    /// Fail on malformed lines instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Also print a per-split markdown summary table
    #[arg(long)]
    pub summary: bool,

    /// Write per-split statistics as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

impl From<&AnalyzeArgs> for AnalyzeConfig {
    fn from(a: &AnalyzeArgs) -> Self {
        AnalyzeConfig {
            whitespace_markups: a.whitespace_markups.clone(),
            strict:             a.strict,
        }
    }
}
