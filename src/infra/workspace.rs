// ============================================================
// Layer 6 — Working Directories
// ============================================================
// File-system layout for a sampling run:
//
//   <dataset_dir>/              ← split files end up here
//   <temp_dir>/<uuid>/          ← one throw-away dir per run
//       data.tar.gz
//       aclImdb/...
//
// A TempWorkspace deletes its directory when dropped, unless it
// was told to keep it (useful when debugging a run).
//
// Reference: Rust Book §15 (Drop trait)
//            uuid crate documentation

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Make sure `dir` exists as a directory, creating it (and parents)
/// if needed. A regular file in the way is an error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            bail!("'{}' exists but is not a folder", dir.display());
        }
        return Ok(());
    }

    fs::create_dir_all(dir).with_context(|| format!("Cannot create '{}'", dir.display()))?;
    tracing::debug!("Created directory '{}'", dir.display());
    Ok(())
}

/// A uniquely named directory under a temp root.
#[derive(Debug)]
pub struct TempWorkspace {
    path: PathBuf,
    keep: bool,
}

impl TempWorkspace {
    /// Create `<root>/<uuid-v4>`.
    pub fn create(root: &Path) -> Result<Self> {
        let path = root.join(Uuid::new_v4().to_string());
        fs::create_dir_all(&path)
            .with_context(|| format!("Cannot create temp working directory '{}'", path.display()))?;

        tracing::debug!("Temp working directory: {}", path.display());
        Ok(Self { path, keep: false })
    }

    /// Leave the directory on disk after the workspace is dropped
    pub fn keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        if self.keep {
            tracing::info!("Keeping temp working directory '{}'", self.path.display());
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::warn!("Cannot remove '{}': {}", self.path.display(), e);
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/c");
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
        // Second call is a no-op
        ensure_dir(&target).unwrap();
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data");
        fs::write(&file, "x").unwrap();
        assert!(ensure_dir(&file).is_err());
    }

    #[test]
    fn test_workspace_removed_on_drop() {
        let dir = TempDir::new().unwrap();
        let path = {
            let ws = TempWorkspace::create(dir.path()).unwrap();
            assert!(ws.path().is_dir());
            ws.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_workspace_kept_on_request() {
        let dir = TempDir::new().unwrap();
        let path = {
            let ws = TempWorkspace::create(dir.path()).unwrap().keep(true);
            ws.path().to_path_buf()
        };
        assert!(path.is_dir());
    }

    #[test]
    fn test_workspaces_are_unique() {
        let dir = TempDir::new().unwrap();
        let a = TempWorkspace::create(dir.path()).unwrap();
        let b = TempWorkspace::create(dir.path()).unwrap();
        assert_ne!(a.path(), b.path());
    }
}
