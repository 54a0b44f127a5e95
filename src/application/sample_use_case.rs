// ============================================================
// Layer 2 — SampleUseCase
// ============================================================
// Builds small train/dev/test split files from the Stanford
// Large Movie Review corpus:
//
//   Step 1: Ensure the dataset directory exists  (Layer 6 - infra)
//   Step 2: Create a per-run temp directory      (Layer 6 - infra)
//   Step 3: Download the corpus archive          (Layer 6 - infra)
//   Step 4: Unpack it                            (Layer 6 - infra)
//   Step 5: Group review files by class          (Layer 4 - data)
//   Step 6: Sample train+dev, then test          (Layer 4 - data)
//   Step 7: Write the three split files          (Layer 4 - data)
//
// Train and dev come from ONE sample of the training population,
// so they never share a review. Test is sampled from the test
// population.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};

use crate::application::settings::CorporaSettings;
use crate::data::{
    loader::{collect_class_files, ClassFiles},
    sampler::{get_sample_dataset, split_sample},
    writer::save_dataset,
};
use crate::domain::sample::SampleEntry;
use crate::domain::traits::Downloader;
use crate::infra::{
    archive::unpack_tar_gz,
    workspace::{ensure_dir, TempWorkspace},
};

// ─── Sample sizes ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    pub train_size: usize,
    pub dev_size: usize,
    pub test_size: usize,
    /// Leave the temp working directory behind after the run
    pub keep_temp: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            train_size: 5000,
            dev_size: 1000,
            test_size: 5000,
            keep_temp: false,
        }
    }
}

/// Records written per split file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    pub train: usize,
    pub dev: usize,
    pub test: usize,
}

// ─── SampleUseCase ────────────────────────────────────────────────────────────
pub struct SampleUseCase {
    settings: CorporaSettings,
    config: SampleConfig,
    downloader: Box<dyn Downloader>,
}

impl SampleUseCase {
    pub fn new(
        settings: CorporaSettings,
        config: SampleConfig,
        downloader: Box<dyn Downloader>,
    ) -> Self {
        Self { settings, config, downloader }
    }

    pub fn execute(&self) -> Result<SampleSummary> {
        let s = &self.settings;
        let cfg = &self.config;

        // ── Step 1: Dataset directory ─────────────────────────────────────────
        let train_dev_size = match cfg.train_size.checked_add(cfg.dev_size) {
            Some(size) => size,
            None => bail!(
                "Train size {} plus dev size {} is too large",
                cfg.train_size,
                cfg.dev_size
            ),
        };

        ensure_dir(&s.dataset_dir)?;

        // ── Step 2: Temp working directory ────────────────────────────────────
        let workspace = TempWorkspace::create(&s.temp_dir)?.keep(cfg.keep_temp);
        let archive_path = workspace.path().join("data.tar.gz");
        tracing::debug!("Data file path: {}", archive_path.display());

        // ── Step 3 + 4: Download and unpack ───────────────────────────────────
        self.downloader.download(&s.dataset_url, &archive_path)?;
        unpack_tar_gz(&archive_path, workspace.path())?;

        // ── Step 5: Review files per class ────────────────────────────────────
        let training_files = collect_class_files(workspace.path(), "train")?;
        let test_files = collect_class_files(workspace.path(), "test")?;
        tracing::info!(
            "Found {} training and {} test reviews",
            training_files.total(),
            test_files.total()
        );

        // ── Step 6: Sample ────────────────────────────────────────────────────
        // Indices point into the per-class file lists
        let train_dev = sample_split("train+dev", &training_files, train_dev_size)?;
        let (train, dev) = split_sample(train_dev, cfg.train_size);
        let test = sample_split("test", &test_files, cfg.test_size)?;

        // ── Step 7: Save split files ──────────────────────────────────────────
        tracing::info!("Saving training dataset to '{}'", s.train_file.display());
        let train = save_dataset(&s.train_file, &train, &training_files)?;

        tracing::info!("Saving dev dataset to '{}'", s.dev_file.display());
        let dev = save_dataset(&s.dev_file, &dev, &training_files)?;

        tracing::info!("Saving test dataset to '{}'", s.test_file.display());
        let test = save_dataset(&s.test_file, &test, &test_files)?;

        Ok(SampleSummary { train, dev, test })
    }
}

/// Sample `size` entries and treat a short result as fatal.
fn sample_split(name: &str, files: &ClassFiles, size: usize) -> Result<Vec<SampleEntry<i32>>> {
    let sample = get_sample_dataset(&files.counts(), size);
    if sample.len() != size {
        bail!(
            "Cannot sample {} {} reviews: only {} available",
            size,
            name,
            files.total()
        );
    }
    Ok(sample)
}
