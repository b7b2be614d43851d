// SPDX-License-Identifier: PMPL-1.0-or-later

//! Indicator catalog and display-label resolution.
//!
//! Each selectable indicator has a canonical key (a stable English name such
//! as `"Diabetes Prevalence"`) and the dataset column backing it. The UI only
//! ever sees localized display labels, so a selection has to be mapped back:
//! display label → canonical key → column.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::columns;
use crate::i18n::{self, I18nError, Lang};

/// Selectable dashboard indicators, in catalog declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    DiabetesPrevalence,
    HypertensionPrevalence,
    FluPrevalence,
    SanitationAccess,
    AverageIncome,
    ClinicCount,
    AverageAge,
    Population,
}

impl Indicator {
    /// Every indicator in declaration order. Selector options and tie-breaks
    /// follow this order.
    pub fn all() -> &'static [Indicator] {
        &[
            Indicator::DiabetesPrevalence,
            Indicator::HypertensionPrevalence,
            Indicator::FluPrevalence,
            Indicator::SanitationAccess,
            Indicator::AverageIncome,
            Indicator::ClinicCount,
            Indicator::AverageAge,
            Indicator::Population,
        ]
    }

    /// Stable internal identifier, also used as the translation key.
    pub fn canonical_key(&self) -> &'static str {
        match self {
            Indicator::DiabetesPrevalence => "Diabetes Prevalence",
            Indicator::HypertensionPrevalence => "Hypertension Prevalence",
            Indicator::FluPrevalence => "Flu Prevalence",
            Indicator::SanitationAccess => "Access to Sanitation (%)",
            Indicator::AverageIncome => "Average Income (USD)",
            Indicator::ClinicCount => "Number of Clinics",
            Indicator::AverageAge => "Average Age",
            Indicator::Population => "Population",
        }
    }

    /// Dataset column backing this indicator (raw or derived).
    pub fn column(&self) -> &'static str {
        match self {
            Indicator::DiabetesPrevalence => columns::DIABETES_PER_1000,
            Indicator::HypertensionPrevalence => columns::HYPERTENSION_PER_1000,
            Indicator::FluPrevalence => columns::FLU_PER_1000,
            Indicator::SanitationAccess => columns::SANITATION_PCT,
            Indicator::AverageIncome => columns::AVG_INCOME_USD,
            Indicator::ClinicCount => columns::NUM_CLINICS,
            Indicator::AverageAge => columns::AVG_AGE,
            Indicator::Population => columns::POPULATION,
        }
    }

    /// Whether values are whole counts (shown with thousands separators)
    /// rather than rates or averages (shown with two decimals).
    pub fn is_count(&self) -> bool {
        matches!(self, Indicator::Population | Indicator::ClinicCount)
    }

    pub fn from_canonical_key(key: &str) -> Option<Indicator> {
        Indicator::all()
            .iter()
            .copied()
            .find(|indicator| indicator.canonical_key() == key)
    }

    /// Localized display label.
    pub fn label(&self, lang: Lang) -> Result<String, I18nError> {
        i18n::t(lang, self.canonical_key())
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_key())
    }
}

/// Column backing `canonical_key`, or `None` for an unknown key.
///
/// # Examples
///
/// ```
/// use ward_health::indicators::column_for;
/// assert_eq!(column_for("Population"), Some("Population"));
/// assert_eq!(column_for("Diabetes Prevalence"), Some("Diabetes_Prevalence_per_1000"));
/// assert_eq!(column_for("unknown-key"), None);
/// ```
pub fn column_for(canonical_key: &str) -> Option<&'static str> {
    Indicator::from_canonical_key(canonical_key).map(|indicator| indicator.column())
}

// ─── Display label index ────────────────────────────────────────────

/// Localized display label → indicator, for one language.
///
/// Entries keep catalog declaration order. If two indicators localize to the
/// same label, lookups return the first one declared.
#[derive(Debug, Clone)]
pub struct DisplayLabelIndex {
    lang: Lang,
    entries: Vec<(String, Indicator)>,
}

impl DisplayLabelIndex {
    pub fn build(lang: Lang) -> Result<Self, I18nError> {
        let entries = Indicator::all()
            .iter()
            .map(|indicator| Ok((indicator.label(lang)?, *indicator)))
            .collect::<Result<Vec<_>, I18nError>>()?;
        Ok(Self { lang, entries })
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn lookup(&self, display_label: &str) -> Option<Indicator> {
        self.entries
            .iter()
            .find(|(label, _)| label == display_label)
            .map(|(_, indicator)| *indicator)
    }

    pub fn label_for(&self, indicator: Indicator) -> &str {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == indicator)
            .map(|(label, _)| label.as_str())
            .unwrap_or_else(|| indicator.canonical_key())
    }

    /// Selector options as `(display label, indicator)` pairs. A label that
    /// collides with an earlier one is listed once.
    pub fn options(&self) -> Vec<(&str, Indicator)> {
        let mut options: Vec<(&str, Indicator)> = Vec::with_capacity(self.entries.len());
        for (label, indicator) in &self.entries {
            if !options.iter().any(|(seen, _)| *seen == label.as_str()) {
                options.push((label.as_str(), *indicator));
            }
        }
        options
    }

    /// Labels shared by more than one indicator, with the indicators sharing
    /// them in declaration order.
    pub fn collisions(&self) -> Vec<(String, Vec<Indicator>)> {
        let mut collisions: Vec<(String, Vec<Indicator>)> = Vec::new();
        for (label, _) in &self.entries {
            if collisions.iter().any(|(seen, _)| seen == label) {
                continue;
            }
            let sharing: Vec<Indicator> = self
                .entries
                .iter()
                .filter(|(other, _)| other == label)
                .map(|(_, indicator)| *indicator)
                .collect();
            if sharing.len() > 1 {
                collisions.push((label.clone(), sharing));
            }
        }
        collisions
    }
}

/// Lazily rebuilt [`DisplayLabelIndex`].
///
/// Either valid for one language or stale. Asking for a different language,
/// or calling [`invalidate`](Self::invalidate), forces a rebuild on next use.
#[derive(Debug, Default)]
pub struct LabelCache {
    index: Option<DisplayLabelIndex>,
    rebuilds: usize,
}

impl LabelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.index = None;
    }

    /// Language the cached index is valid for, if any.
    pub fn cached_lang(&self) -> Option<Lang> {
        self.index.as_ref().map(DisplayLabelIndex::lang)
    }

    /// Number of times the index has been built.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    pub fn index_for(&mut self, lang: Lang) -> Result<&DisplayLabelIndex, I18nError> {
        if self.cached_lang() != Some(lang) {
            self.index = None;
        }
        let index = match self.index.take() {
            Some(index) => index,
            None => {
                debug!(lang = %lang, "rebuilding display label index");
                self.rebuilds += 1;
                DisplayLabelIndex::build(lang)?
            }
        };
        let index: &DisplayLabelIndex = self.index.insert(index);
        Ok(index)
    }

    /// Canonical key for a localized display label in `lang`, or `None` when
    /// no indicator carries that label.
    pub fn canonical_key_for_display(
        &mut self,
        display_label: &str,
        lang: Lang,
    ) -> Result<Option<&'static str>, I18nError> {
        Ok(self
            .index_for(lang)?
            .lookup(display_label)
            .map(|indicator| indicator.canonical_key()))
    }
}
