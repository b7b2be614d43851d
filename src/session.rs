// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-session UI state: the active language and the display-label cache
//! that depends on it.
//!
//! Each user session owns one of these. Nothing here is global, so two
//! sessions can run in different languages side by side.

use tracing::debug;

use crate::i18n::{self, I18nError, Lang};
use crate::indicators::{DisplayLabelIndex, Indicator, LabelCache};

#[derive(Debug, Default)]
pub struct Session {
    lang: Lang,
    labels: LabelCache,
}

impl Session {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            labels: LabelCache::new(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Switch the active language. Invalidates the label index when the
    /// language actually changes.
    pub fn set_language(&mut self, lang: Lang) {
        if self.lang == lang {
            return;
        }
        debug!(from = %self.lang, to = %lang, "language changed");
        self.lang = lang;
        self.labels.invalidate();
    }

    /// Resolve `key` in the active language.
    pub fn resolve(&self, key: &str, params: &[(&str, &str)]) -> Result<String, I18nError> {
        i18n::resolve(self.lang, key, params)
    }

    pub fn t(&self, key: &str) -> Result<String, I18nError> {
        i18n::t(self.lang, key)
    }

    /// Display label index for the active language, rebuilt if stale.
    pub fn label_index(&mut self) -> Result<&DisplayLabelIndex, I18nError> {
        self.labels.index_for(self.lang)
    }

    /// Indicator selected by a display label in the active language.
    pub fn indicator_for_display(&mut self, display_label: &str) -> Result<Option<Indicator>, I18nError> {
        Ok(self.label_index()?.lookup(display_label))
    }

    pub fn canonical_key_for_display(
        &mut self,
        display_label: &str,
        lang: Lang,
    ) -> Result<Option<&'static str>, I18nError> {
        self.labels.canonical_key_for_display(display_label, lang)
    }

    /// Times the label index has been (re)built in this session.
    pub fn label_rebuilds(&self) -> usize {
        self.labels.rebuilds()
    }
}
