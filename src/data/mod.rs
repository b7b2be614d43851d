// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ward dataset: CSV loading, derived prevalence columns and the
//! single-entry load cache.
//!
//! The dataset is held column-wise in a [`Frame`] so indicators can address
//! their backing column by name, the same way the chart layer does.

mod cache;
pub mod columns;
mod derive;
mod error;
mod frame;
mod load;
pub mod stats;

pub use cache::DatasetCache;
pub use derive::{derived_columns, prevalence_per_1000};
pub use error::DataError;
pub use frame::{Cell, Column, Frame};
pub use load::{load_dataset, parse_csv};

use serde::Serialize;
use std::path::PathBuf;

/// A loaded and derived ward table plus where it came from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    #[serde(skip)]
    pub frame: Frame,
    pub source: Option<PathBuf>,
    /// blake3 hex digest of the file contents.
    pub fingerprint: Option<String>,
}

impl Dataset {
    /// The dataset every view falls back to when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Ward names in file order.
    pub fn wards(&self) -> &[String] {
        self.frame.text(columns::WARD).unwrap_or(&[])
    }

    /// Row index of `ward`, if present.
    pub fn ward_row(&self, ward: &str) -> Option<usize> {
        self.wards().iter().position(|name| name == ward)
    }
}
