// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, loads the configuration file, and hands off to the
// use cases in Layer 2. Everything printed to stdout is printed
// from here.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use commands::{AnalyzeArgs, Commands, SampleArgs};
use crate::application::settings::CorporaSettings;
use crate::infra::config::{ConfigHelper, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "imdb-corpora",
    version,
    about = "Sample the Stanford Large Movie Review corpus and inspect its vocabulary."
)]
pub struct Cli {
    /// Configuration file (sectioned JSON)
    #[arg(long, global = true, env = CONFIG_FILE_ENV, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load settings, then route to the matching use case.
    pub fn run(self) -> Result<()> {
        let config   = ConfigHelper::load_or_default(&self.config)?;
        let settings = CorporaSettings::from_config(&config)?;

        match &self.command {
            Commands::Sample(args)  => run_sample(settings, args),
            Commands::Analyze(args) => run_analyze(settings, args),
        }
    }
}

fn run_sample(settings: CorporaSettings, args: &SampleArgs) -> Result<()> {
    use crate::application::sample_use_case::SampleUseCase;
    use crate::domain::traits::Downloader;
    use crate::infra::downloader::{HttpDownloader, LocalCopyDownloader};

    let downloader: Box<dyn Downloader> = match &args.archive {
        Some(path) => Box::new(LocalCopyDownloader::new(path)),
        None       => Box::new(HttpDownloader::new()?),
    };

    tracing::info!("Sampling Stanford IMDB dataset from {}", settings.dataset_url);
    let summary = SampleUseCase::new(settings.clone(), args.into(), downloader).execute()?;

    println!("train: {} reviews -> {}", summary.train, settings.train_file.display());
    println!("dev:   {} reviews -> {}", summary.dev, settings.dev_file.display());
    println!("test:  {} reviews -> {}", summary.test, settings.test_file.display());
    Ok(())
}

fn run_analyze(settings: CorporaSettings, args: &AnalyzeArgs) -> Result<()> {
    use crate::application::analyze_use_case::AnalyzeUseCase;
    use crate::infra::report::{markdown_table, write_json};

    let report = AnalyzeUseCase::new(settings, args.into())?.execute()?;

    for word in &report.total.words {
        println!("{word}");
    }
    println!("Vocabulary size: {}", report.total.words.len());

    for markup in &report.total.markups {
        println!("{markup}");
    }
    println!("Markup vocabulary size: {}", report.total.markups.len());

    if args.summary {
        println!("\n#### Stanford IMDB splits\n");
        println!("{}", markdown_table(&report.stats));
    }

    if let Some(path) = &args.report_json {
        write_json(path, &report.stats)?;
        tracing::info!("Report written to '{}'", path.display());
    }

    Ok(())
}
