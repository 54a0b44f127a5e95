// ============================================================
// Layer 2 — AnalyzeUseCase
// ============================================================
// Scans the train, dev and test split files and builds:
//   - the union word vocabulary (cleaned text)
//   - the union markup vocabulary (raw text)
//   - per-split statistics plus a "total" row
//
// Printing is left to the CLI layer.

use anyhow::Result;

use crate::application::settings::CorporaSettings;
use crate::data::{
    loader::CorpusFile,
    preprocessor::TextCleaner,
    vocabulary::{SplitVocabulary, VocabularyScanner},
};
use crate::infra::report::SplitStats;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    /// Extra whitespace-equivalent markup regexes for the cleaner
    pub whitespace_markups: Vec<String>,
    /// Abort on malformed lines instead of skipping them
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct VocabularyReport {
    /// All splits merged
    pub total: SplitVocabulary,
    /// One row per split, then a "total" row
    pub stats: Vec<SplitStats>,
}

pub struct AnalyzeUseCase {
    settings: CorporaSettings,
    cleaner: TextCleaner,
    strict: bool,
}

impl AnalyzeUseCase {
    pub fn new(settings: CorporaSettings, config: AnalyzeConfig) -> Result<Self> {
        let cleaner = TextCleaner::with_patterns(&config.whitespace_markups)?;
        tracing::debug!(
            "Whitespace markup patterns: {:?}",
            cleaner.patterns().collect::<Vec<_>>()
        );
        Ok(Self { settings, cleaner, strict: config.strict })
    }

    pub fn execute(&self) -> Result<VocabularyReport> {
        let scanner = VocabularyScanner::new(&self.cleaner).strict(self.strict);

        let mut total = SplitVocabulary::default();
        let mut stats = Vec::new();

        for (split, path) in self.settings.split_files() {
            tracing::info!("Analysing {} split '{}'", split, path.display());
            let vocab = scanner.scan(&CorpusFile::new(path))?;

            stats.push(SplitStats::from_vocabulary(split, &vocab));
            total.merge(&vocab);
        }

        stats.push(SplitStats::from_vocabulary("total", &total));
        Ok(VocabularyReport { total, stats })
    }
}
