// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization for the ward health dashboard.
//!
//! Provides a data-driven translation table for the two dashboard languages
//! and a small `{placeholder}` template engine.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | ne   | Nepali   | नेपाली       |
//!
//! ## Design
//!
//! Keys are plain strings. UI keys are snake_case (`"hub_title"`) and are
//! enumerated in [`keys`]; indicator labels are keyed by their canonical
//! indicator name (`"Diabetes Prevalence"`). A key missing from the requested
//! language resolves to the key text itself. There is no cross-language
//! fallback: a Nepali miss never shows the English string.
//!
//! The table is embedded at compile time as static data. Consistency between
//! languages, the UI key list and the indicator catalog is checked by
//! [`crate::lint`].

mod catalog;
mod error;
pub mod keys;
mod template;

pub use catalog::{has_key, resolve, t, table, template_for, Lang};
pub use error::I18nError;
pub use template::{format_template, placeholders};
