// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for exported dashboard views

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dashboard::DashboardView;
use crate::data::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, document: &ExportDocument<'_>) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(document)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        }
    }
}

/// A dashboard view plus provenance, as written by `export`.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    /// RFC 3339 timestamp.
    pub generated_at: String,
    pub tool_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    pub view: &'a DashboardView,
}

impl<'a> ExportDocument<'a> {
    pub fn new(view: &'a DashboardView, dataset: &Dataset) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION"),
            source: dataset.source.clone(),
            fingerprint: dataset.fingerprint.clone(),
            view,
        }
    }
}
