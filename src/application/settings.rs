// ============================================================
// Layer 2 — Corpus Settings
// ============================================================
// Resolves every path and URL the use cases need from the
// sectioned configuration, applying built-in defaults for keys
// that are absent. Both use cases take a CorporaSettings, never
// the raw ConfigHelper, so they can be driven directly in tests.

use anyhow::Result;
use std::path::PathBuf;

use crate::infra::config::{ConfigHelper, DEFAULT_SECTION};

pub const CORPORA_CONFIG_SECTION: &str = "corpora";
pub const DATASET_DIR: &str = "dataset_dir";
pub const TEMP_DIR: &str = "temp_dir";
pub const STANFORD_MOVIE_REVIEW_URL: &str = "stanford_movie_review_dataset_url";
pub const STANFORD_MOVIE_REVIEW_TRAIN_FILE_PATH: &str = "stanford_movie_review_train_file_path";
pub const STANFORD_MOVIE_REVIEW_DEV_FILE_PATH: &str = "stanford_movie_review_dev_file_path";
pub const STANFORD_MOVIE_REVIEW_TEST_FILE_PATH: &str = "stanford_movie_review_test_file_path";

pub const DEFAULT_STANFORD_MOVIE_REVIEW_URL: &str =
    "https://ai.stanford.edu/~amaas/data/sentiment/aclImdb_v1.tar.gz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorporaSettings {
    pub dataset_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub dataset_url: String,
    pub train_file: PathBuf,
    pub dev_file: PathBuf,
    pub test_file: PathBuf,
}

impl CorporaSettings {
    pub fn from_config(config: &ConfigHelper) -> Result<Self> {
        let dataset_dir = config.get_or(DATASET_DIR, DEFAULT_SECTION, "data")?;
        let temp_dir = config.get_or(TEMP_DIR, DEFAULT_SECTION, "temp")?;

        let split_path = |key: &str, split: &str| -> Result<PathBuf> {
            let default = format!("{dataset_dir}/stanford-imdb-{split}.txt");
            Ok(PathBuf::from(config.get_or(key, CORPORA_CONFIG_SECTION, &default)?))
        };

        let settings = Self {
            dataset_url: config.get_or(
                STANFORD_MOVIE_REVIEW_URL,
                CORPORA_CONFIG_SECTION,
                DEFAULT_STANFORD_MOVIE_REVIEW_URL,
            )?,
            train_file: split_path(STANFORD_MOVIE_REVIEW_TRAIN_FILE_PATH, "train")?,
            dev_file: split_path(STANFORD_MOVIE_REVIEW_DEV_FILE_PATH, "dev")?,
            test_file: split_path(STANFORD_MOVIE_REVIEW_TEST_FILE_PATH, "test")?,
            dataset_dir: PathBuf::from(dataset_dir),
            temp_dir: PathBuf::from(temp_dir),
        };

        tracing::debug!("Corpora settings: {:?}", settings);
        Ok(settings)
    }

    /// (split name, file) for train, dev and test, in that order
    pub fn split_files(&self) -> [(&'static str, &PathBuf); 3] {
        [
            ("train", &self.train_file),
            ("dev", &self.dev_file),
            ("test", &self.test_file),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let s = CorporaSettings::from_config(&ConfigHelper::default()).unwrap();
        assert_eq!(s.dataset_dir, PathBuf::from("data"));
        assert_eq!(s.temp_dir, PathBuf::from("temp"));
        assert_eq!(s.dataset_url, DEFAULT_STANFORD_MOVIE_REVIEW_URL);
        assert_eq!(s.train_file, PathBuf::from("data/stanford-imdb-train.txt"));
        assert_eq!(s.test_file, PathBuf::from("data/stanford-imdb-test.txt"));
    }

    #[test]
    fn test_values_from_config() {
        let cfg = ConfigHelper::from_json_str(
            r#"{
                "DEFAULT": { "dataset_dir": "out", "temp_dir": "/tmp/corpora" },
                "corpora": {
                    "stanford_movie_review_dataset_url": "http://mirror/imdb.tgz",
                    "stanford_movie_review_dev_file_path": "${dataset_dir}/validation.txt"
                }
            }"#,
        )
        .unwrap();

        let s = CorporaSettings::from_config(&cfg).unwrap();
        assert_eq!(s.dataset_url, "http://mirror/imdb.tgz");
        assert_eq!(s.dev_file, PathBuf::from("out/validation.txt"));
        assert_eq!(s.train_file, PathBuf::from("out/stanford-imdb-train.txt"));
        assert_eq!(s.temp_dir, PathBuf::from("/tmp/corpora"));
        assert_eq!(s.split_files()[1].0, "dev");
    }
}
