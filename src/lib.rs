// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ward Health: a localized ward-level urban health dashboard.
//!
//! The library turns a per-ward CSV (population, case counts, sanitation,
//! income, clinics, age) into a dashboard view in English or Nepali.
//!
//! PILLARS:
//! 1. **i18n**: static per-language translation tables with `{name}`
//!    placeholder templates and key fallback.
//! 2. **indicators**: the indicator catalog and the display label →
//!    canonical key → column resolver the selectors go through.
//! 3. **data**: CSV ingestion, derived per-1000 prevalence columns and a
//!    single-entry load cache.
//! 4. **dashboard**: per-interaction view model (metrics, ward detail,
//!    chart requests, notices), rendered by **report** to the console, a
//!    terminal UI, or JSON/YAML exports.

pub mod config;
pub mod dashboard;
pub mod data;
pub mod diagnostics;
pub mod i18n;
pub mod indicators;
pub mod lint;
pub mod report;
pub mod session;
