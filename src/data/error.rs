// SPDX-License-Identifier: PMPL-1.0-or-later

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("the file {} was not found", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing")]
    MissingColumn(String),

    #[error("column `{0}` is not numeric")]
    NotNumeric(String),

    #[error("row {row}: invalid value `{value}` in column `{column}` ({reason})")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
        reason: &'static str,
    },

    #[error("ward `{0}` appears more than once")]
    DuplicateWard(String),

    #[error("column `{column}` has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
}

impl DataError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            DataError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}
