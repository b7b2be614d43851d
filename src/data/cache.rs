// SPDX-License-Identifier: PMPL-1.0-or-later

//! Single-entry memo of the loaded dataset.
//!
//! Keyed on the file's path, modification time and length. The file is not
//! watched; a changed stamp is noticed on the next lookup and triggers a
//! reload.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tracing::debug;

use super::{load_dataset, DataError, Dataset};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FileStamp {
    path: PathBuf,
    modified: FileTime,
    len: u64,
}

impl FileStamp {
    fn of(path: &Path) -> Result<Self, DataError> {
        let meta = fs::metadata(path).map_err(|err| DataError::from_io(path, err))?;
        Ok(Self {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            modified: FileTime::from_last_modification_time(&meta),
            len: meta.len(),
        })
    }
}

#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(FileStamp, Dataset)>,
    loads: usize,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset at `path`, loading and deriving it only when the cached
    /// entry is for another file or the file has changed.
    ///
    /// A failed load clears the cache.
    pub fn get_or_load(&mut self, path: &Path) -> Result<&Dataset, DataError> {
        let stamp = match FileStamp::of(path) {
            Ok(stamp) => stamp,
            Err(err) => {
                self.entry = None;
                return Err(err);
            }
        };

        let entry = match self.entry.take() {
            Some((cached, dataset)) if cached == stamp => {
                debug!(path = %path.display(), "dataset cache hit");
                (cached, dataset)
            }
            _ => {
                debug!(path = %path.display(), "dataset cache miss");
                let dataset = load_dataset(path)?;
                self.loads += 1;
                (stamp, dataset)
            }
        };

        let (_, dataset) = &*self.entry.insert(entry);
        Ok(dataset)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of loads performed (cache misses that succeeded).
    pub fn loads(&self) -> usize {
        self.loads
    }
}
