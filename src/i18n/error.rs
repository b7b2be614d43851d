// SPDX-License-Identifier: PMPL-1.0-or-later

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported language `{0}` (expected one of: en, ne)")]
    UnknownLanguage(String),

    /// A template referenced `{name}` but the caller supplied no value for it.
    /// This is a mismatch between a template and its call site.
    #[error("template `{template}` references `{{{name}}}` but no value was supplied")]
    MissingPlaceholder { template: String, name: String },
}
