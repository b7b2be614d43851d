// SPDX-License-Identifier: PMPL-1.0-or-later

//! `ward-health doctor`: environment and data self-checks.

use anyhow::{anyhow, Result};
use colored::*;
use std::env;
use std::path::Path;

use crate::config::{Settings, DATA_PATH_ENV};
use crate::data::{load_dataset, DataError};
use crate::lint::lint_catalog;

pub fn run_self_diagnostics(settings: &Settings) -> Result<()> {
    println!("ward-health self-diagnostics");

    let checks = collect(settings);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect(settings: &Settings) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("ward-health {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(match &settings.config_path {
        Some(path) => Diagnostic::ok("config file", format!("{} loaded", path.display())),
        None => Diagnostic::warning("config file", "none found, using defaults".to_string()),
    });
    checks.push(Diagnostic::ok(
        "language",
        format!("{} ({})", settings.lang.native_name(), settings.lang.code()),
    ));
    checks.push(check_env(DATA_PATH_ENV));
    checks.push(check_file("data file", &settings.data_path));
    if settings.data_path.is_file() {
        checks.push(check_dataset(&settings.data_path));
    }
    checks.push(check_catalog());
    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:16} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

fn check_file(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_file() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a regular file", path.display()),
        )
    } else {
        Diagnostic::error(label, format!("{} missing", path.display()))
    }
}

fn check_dataset(path: &Path) -> Diagnostic {
    match load_dataset(path) {
        Ok(dataset) => Diagnostic::ok(
            "dataset",
            format!(
                "{} wards, {} columns (blake3 {})",
                dataset.wards().len(),
                dataset.frame.column_names().count(),
                dataset
                    .fingerprint
                    .as_deref()
                    .map(|digest| &digest[..digest.len().min(12)])
                    .unwrap_or("-")
            ),
        ),
        Err(err @ DataError::NotFound { .. }) => Diagnostic::error("dataset", err.to_string()),
        Err(err) => Diagnostic::error("dataset", format!("not loadable: {}", err)),
    }
}

fn check_catalog() -> Diagnostic {
    match lint_catalog() {
        Ok(report) if report.is_clean() => Diagnostic::ok(
            "catalog",
            format!("consistent ({} notes)", report.findings.len()),
        ),
        Ok(report) => Diagnostic::error(
            "catalog",
            format!("{} problems (run `ward-health lint`)", report.error_count()),
        ),
        Err(err) => Diagnostic::error("catalog", err.to_string()),
    }
}

fn check_env(env_key: &str) -> Diagnostic {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok("environment", format!("{}={}", env_key, value))
        }
        _ => Diagnostic::ok("environment", format!("{} not set", env_key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::report::ExportFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings(data_path: &Path) -> Settings {
        Settings {
            data_path: data_path.to_path_buf(),
            lang: Lang::En,
            export_format: ExportFormat::Json,
            config_path: None,
        }
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let checks = collect(&settings(&dir.path().join("absent.csv")));
        let data = checks.iter().find(|c| c.label == "data file").unwrap();
        assert_eq!(data.level, Level::Error);
        assert!(checks.iter().all(|c| c.label != "dataset"));
    }

    #[test]
    fn loadable_data_passes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Ward,Population,Diabetes_Cases,Hypertension_Cases,Flu_Cases,Access_to_Sanitation_Pct,Avg_Income_USD,Num_Clinics,Avg_Age\n\
             A,1000,50,80,20,70,300,2,31\n"
        )
        .unwrap();
        let checks = collect(&settings(file.path()));
        let dataset = checks.iter().find(|c| c.label == "dataset").unwrap();
        assert_eq!(dataset.level, Level::Ok);
        assert!(dataset.detail.starts_with("1 wards"));
        assert!(checks
            .iter()
            .filter(|c| c.label != "config file")
            .all(|c| c.level == Level::Ok));
    }

    #[test]
    fn invalid_data_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Ward,Population\nA,1000\n").unwrap();
        let checks = collect(&settings(file.path()));
        let dataset = checks.iter().find(|c| c.label == "dataset").unwrap();
        assert_eq!(dataset.level, Level::Error);
        assert!(dataset.detail.contains("Diabetes_Cases"), "{}", dataset.detail);
    }
}
