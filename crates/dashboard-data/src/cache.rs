//! Modification-time keyed cache around normalized workbook data.
//!
//! The engine itself is cache-free; callers that re-run aggregations on
//! every view change hold one [`WorkbookCache`] per source file and let it
//! decide when the normalized sheets need reloading.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use dashboard_core::error::Result;
use dashboard_core::models::NormalizedSheet;

use crate::workbook::load_normalized;

type Loader = Box<dyn Fn(&Path) -> Result<Vec<NormalizedSheet>>>;

/// Caches the normalized sheets of a single workbook.
///
/// The cache key is the file's modification time: [`WorkbookCache::get`]
/// reloads when the file changed on disk and returns the cached sheets
/// otherwise. [`WorkbookCache::invalidate`] forces the next `get` to
/// reload regardless.
pub struct WorkbookCache {
    path: PathBuf,
    loader: Loader,
    loaded_at: Option<SystemTime>,
    sheets: Vec<NormalizedSheet>,
}

impl WorkbookCache {
    /// Create a cache for the workbook at `path`. Nothing is loaded until
    /// the first [`get`](WorkbookCache::get).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_loader(path, Box::new(|p: &Path| load_normalized(p)))
    }

    fn with_loader(path: impl Into<PathBuf>, loader: Loader) -> Self {
        Self {
            path: path.into(),
            loader,
            loaded_at: None,
            sheets: Vec::new(),
        }
    }

    /// The normalized sheets for this workbook, reloading when the file's
    /// modification time changed since the last load.
    pub fn get(&mut self) -> Result<&[NormalizedSheet]> {
        let modified = std::fs::metadata(&self.path)?.modified()?;

        if self.loaded_at != Some(modified) {
            self.sheets = (self.loader)(&self.path)?;
            self.loaded_at = Some(modified);
            debug!(
                path = %self.path.display(),
                sheets = self.sheets.len(),
                "workbook cache refreshed"
            );
        }

        Ok(&self.sheets)
    }

    /// Drop the cached data; the next [`get`](WorkbookCache::get) reloads.
    pub fn invalidate(&mut self) {
        self.loaded_at = None;
        self.sheets.clear();
    }

    /// The workbook path this cache serves.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
