// ============================================================
// Layer 6 — Configuration
// ============================================================
// Sectioned key/value settings, read from a JSON file:
//
//   {
//     "DEFAULT": { "dataset_dir": "data", "temp_dir": "temp" },
//     "corpora": {
//       "stanford_movie_review_train_file_path": "${dataset_dir}/train.txt"
//     }
//   }
//
// Lookup rules:
//   - A key is looked up in its section, then in DEFAULT
//   - Values may reference other values:
//       ${key}           → same section (DEFAULT fallback)
//       ${section:key}   → another section
//       $$               → a literal '$'
//   - References resolve recursively, at most 10 levels deep
//   - A missing key is `None`, never a crash; a reference to a
//     missing key IS an error, since the value cannot be built
//
// File location: --config flag, else $CONFIG_FILE_PATH, else
// ./config.json
//
// Reference: serde / serde_json documentation
//            Rust Book §9 (Error Handling with anyhow)

use anyhow::{bail, Context, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path, sync::LazyLock};

/// Section whose values are visible from every other section
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Environment variable naming the configuration file
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE_PATH";

/// Configuration file used when neither flag nor env var is set
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const MAX_INTERPOLATION_DEPTH: usize = 10;

// `$$` or `${...}`
static REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(?:(\$)|\{([^}]*)\})").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ConfigHelper {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigHelper {
    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Read a configuration file if it exists, otherwise fall back
    /// to an empty configuration (every lookup uses its default).
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(
                "Config file '{}' not found, using built-in defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The raw value for `key`, looked up in `section` then DEFAULT.
    pub fn raw(&self, key: &str, section: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .or_else(|| self.sections.get(DEFAULT_SECTION).and_then(|s| s.get(key)))
            .map(String::as_str)
    }

    /// The interpolated value for `key`, or `None` when absent.
    pub fn get_config_value(&self, key: &str, section: &str) -> Result<Option<String>> {
        match self.raw(key, section) {
            Some(raw) => Ok(Some(self.interpolate(raw, section, 1)?)),
            None => Ok(None),
        }
    }

    /// The interpolated value for `key`, or `default` when absent.
    pub fn get_or(&self, key: &str, section: &str, default: &str) -> Result<String> {
        Ok(self
            .get_config_value(key, section)?
            .unwrap_or_else(|| default.to_string()))
    }

    fn interpolate(&self, value: &str, section: &str, depth: usize) -> Result<String> {
        if depth > MAX_INTERPOLATION_DEPTH {
            bail!("Config interpolation deeper than {MAX_INTERPOLATION_DEPTH} levels at '{value}'");
        }

        let mut out = String::with_capacity(value.len());
        let mut last = 0;

        for caps in REFERENCE_REGEX.captures_iter(value) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            out.push_str(&value[last..whole.start]);
            out.push_str(&self.resolve_reference(&caps, section, depth)?);
            last = whole.end;
        }
        out.push_str(&value[last..]);

        Ok(out)
    }

    fn resolve_reference(&self, caps: &Captures, section: &str, depth: usize) -> Result<String> {
        if caps.get(1).is_some() {
            return Ok("$".to_string());
        }

        let reference = caps.get(2).map_or("", |m| m.as_str());
        let (ref_section, ref_key) = match reference.split_once(':') {
            Some((s, k)) => (s, k),
            None => (section, reference),
        };

        let raw = self.raw(ref_key, ref_section).with_context(|| {
            format!("Config reference '${{{reference}}}' points at a missing key")
        })?;

        self.interpolate(raw, ref_section, depth + 1)
    }
}
