// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dashboard output: console printing, file export and the terminal UI

pub mod formatter;
pub mod output;
pub mod tui;

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::dashboard::DashboardView;
use crate::data::Dataset;

pub use formatter::ViewFormatter;
pub use output::{ExportDocument, ExportFormat};
pub use tui::DashboardTui;

/// Serialize `view` with provenance from `dataset`.
pub fn render_export(view: &DashboardView, dataset: &Dataset, format: ExportFormat) -> Result<String> {
    format.serialize(&ExportDocument::new(view, dataset))
}

/// Save an export to file
pub fn save_export<P: AsRef<Path>>(
    view: &DashboardView,
    dataset: &Dataset,
    format: ExportFormat,
    path: P,
) -> Result<()> {
    let rendered = render_export(view, dataset, format)?;
    fs::write(path.as_ref(), rendered)?;
    info!(path = %path.as_ref().display(), format = format.extension(), "export written");
    Ok(())
}

/// Print a view to the console
pub fn print_view(view: &DashboardView) {
    let formatter = ViewFormatter::new();
    formatter.print(view);
}
