// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation table for the ward health dashboard.
//!
//! Embeds all user-facing strings for both dashboard languages as a
//! compile-time static table. Lookup is a linear scan over the key list,
//! which is fine for the ~40 keys we have; it runs a few dozen times per
//! dashboard render.
//!
//! ## Adding a new key
//!
//! 1. Add the key constant to [`super::keys`] and to `keys::ALL`
//! 2. Add the English entry to `EN`
//! 3. Add the Nepali entry to `NE` (a missing entry renders the raw key)
//!
//! Indicator labels are keyed by canonical indicator name and live at the
//! end of each table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::template::format_template;
use super::I18nError;

/// Dashboard display languages.
///
/// Each variant maps to an ISO 639-1 two-letter code. One language is active
/// per [`Session`](crate::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ne,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ne => "ne",
        }
    }

    /// Name of the language written in that language, as shown in the
    /// language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ne => "नेपाली",
        }
    }

    /// Parse an ISO 639-1 code or a native language name.
    ///
    /// Codes are matched case-insensitively; native names exactly.
    pub fn from_code(code: &str) -> Option<Lang> {
        let code = code.trim();
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => return Some(Lang::En),
            "ne" => return Some(Lang::Ne),
            _ => {}
        }
        Lang::all()
            .iter()
            .copied()
            .find(|lang| lang.native_name() == code)
    }

    /// All supported languages, in selector order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ne]
    }

    /// The language after this one in selector order, wrapping around.
    pub fn next(&self) -> Lang {
        match self {
            Lang::En => Lang::Ne,
            Lang::Ne => Lang::En,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Resolve `key` in `lang`, substituting `{name}` placeholders from `params`.
///
/// A key missing from `lang` resolves to the key itself, unformatted. A
/// placeholder without a matching entry in `params` is an error.
///
/// # Examples
///
/// ```
/// use ward_health::i18n::{resolve, Lang};
/// assert_eq!(resolve(Lang::En, "hub_title", &[]).unwrap(), "Urban Health Data Hub");
/// assert_eq!(
///     resolve(Lang::En, "chart_bar_title", &[("indicator", "Population")]).unwrap(),
///     "Population by Ward"
/// );
/// assert_eq!(resolve(Lang::Ne, "no.such.key", &[]).unwrap(), "no.such.key");
/// ```
pub fn resolve(lang: Lang, key: &str, params: &[(&str, &str)]) -> Result<String, I18nError> {
    match template_for(lang, key) {
        Some(template) => format_template(template, params),
        None => Ok(key.to_string()),
    }
}

/// [`resolve`] with no parameters.
pub fn t(lang: Lang, key: &str) -> Result<String, I18nError> {
    resolve(lang, key, &[])
}

/// The raw template for `key` in `lang`, if defined.
pub fn template_for(lang: Lang, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, v)| v)
}

pub fn has_key(lang: Lang, key: &str) -> bool {
    template_for(lang, key).is_some()
}

/// The full static table for `lang`.
pub fn table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Ne => NE,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("hub_title", "Urban Health Data Hub"),
    ("filters_options", "Filters & Options"),
    ("select_language", "भाषा छान्नुहोस् / Select Language"),
    ("select_ward", "Select Ward:"),
    ("all_wards", "All Wards"),
    ("select_indicator_bar_box", "Select Indicator for Bar/Box Plot:"),
    ("dashboard_title", "🏙️ Budhanilkantha Health Dashboard"),
    // Key metrics
    ("key_metrics_header", "Key Metrics (Overall City)"),
    ("total_population", "Total Population"),
    ("avg_diabetes_prev", "Avg. Diabetes Prevalence"),
    ("avg_hypertension_prev", "Avg. Hypertension Prevalence"),
    ("avg_flu_prev", "Avg. Flu Prevalence"),
    ("total_clinics", "Total Clinics"),
    ("per_1000", "{value} per 1000"),
    // Data view
    ("view_raw_data", "View Raw Data"),
    ("ward_detail_header", "Ward Details: {ward}"),
    ("ward_missing", "Ward {ward} is not present in the loaded data."),
    // Charts
    ("charts_header", "Charts"),
    ("chart_bar_title", "{indicator} by Ward"),
    ("chart_box_title", "Distribution of {indicator}"),
    ("chart_pie_title", "Population Proportion by Ward"),
    ("chart_scatter_title", "{y} vs. {x}"),
    ("chart_histogram_title", "{indicator} Histogram"),
    ("chart_heatmap_title", "Correlation Between Indicators"),
    ("axis_ward", "Ward"),
    ("axis_frequency", "Frequency"),
    // Notices
    ("warn_data_not_loaded", "Data could not be loaded. Please check the CSV file."),
    ("err_file_not_found", "Error: The file {path} was not found."),
    ("err_data", "Data error: {reason}"),
    ("warn_select_indicator", "Please select an indicator."),
    ("info_select_indicator", "Please select an indicator from the sidebar to view charts."),
    ("sidebar_info", "Demo dashboard of ward-level urban health indicators. Figures are illustrative."),
    ("tui_controls", "Controls: [j/k] Section, [w/W] Ward, [i/I] Indicator, [l] Language, [Space] Toggle, [q] Quit"),
    // Indicator labels
    ("Diabetes Prevalence", "Diabetes Prevalence"),
    ("Hypertension Prevalence", "Hypertension Prevalence"),
    ("Flu Prevalence", "Flu Prevalence"),
    ("Access to Sanitation (%)", "Access to Sanitation (%)"),
    ("Average Income (USD)", "Average Income (USD)"),
    ("Number of Clinics", "Number of Clinics"),
    ("Average Age", "Average Age"),
    ("Population", "Population"),
];

// ─── Nepali ─────────────────────────────────────────────────────────

const NE: &[(&str, &str)] = &[
    ("hub_title", "शहरी स्वास्थ्य डेटा हब"),
    ("filters_options", "फिल्टर र विकल्पहरू"),
    ("select_language", "भाषा छान्नुहोस् / Select Language"),
    ("select_ward", "वार्ड छान्नुहोस्:"),
    ("all_wards", "सबै वार्डहरू"),
    ("select_indicator_bar_box", "बार/बक्स प्लटका लागि सूचक छान्नुहोस्:"),
    ("dashboard_title", "🏙️ बुढानिलकण्ठ स्वास्थ्य ड्यासबोर्ड"),
    ("key_metrics_header", "मुख्य मेट्रिक्स (समग्र शहर)"),
    ("total_population", "कुल जनसंख्या"),
    ("avg_diabetes_prev", "औसत मधुमेह व्यापकता"),
    ("avg_hypertension_prev", "औसत उच्च रक्तचाप व्यापकता"),
    ("avg_flu_prev", "औसत फ्लू व्यापकता"),
    ("total_clinics", "कुल क्लिनिकहरू"),
    ("per_1000", "प्रति १००० मा {value}"),
    ("view_raw_data", "कच्चा डाटा हेर्नुहोस्"),
    ("ward_detail_header", "वार्ड विवरण: {ward}"),
    ("ward_missing", "वार्ड {ward} लोड गरिएको डाटामा छैन।"),
    ("charts_header", "चार्टहरू"),
    ("chart_bar_title", "वार्ड अनुसार {indicator}"),
    ("chart_box_title", "{indicator} को वितरण"),
    ("chart_pie_title", "वार्ड अनुसार जनसंख्याको अनुपात"),
    ("chart_scatter_title", "{y} बनाम {x}"),
    ("chart_histogram_title", "{indicator} हिस्टोग्राम"),
    ("chart_heatmap_title", "सूचकहरू बीचको सहसम्बन्ध"),
    ("axis_ward", "वार्ड"),
    ("axis_frequency", "आवृत्ति"),
    ("warn_data_not_loaded", "डाटा लोड गर्न सकिएन। कृपया CSV फाइल जाँच गर्नुहोस्।"),
    ("err_file_not_found", "त्रुटि: फाइल {path} फेला परेन।"),
    ("err_data", "डाटा त्रुटि: {reason}"),
    ("warn_select_indicator", "कृपया एउटा सूचक छान्नुहोस्।"),
    ("info_select_indicator", "चार्टहरू हेर्न साइडबारबाट एउटा सूचक छान्नुहोस्।"),
    ("sidebar_info", "वार्ड स्तरका शहरी स्वास्थ्य सूचकहरूको डेमो ड्यासबोर्ड। तथ्याङ्क उदाहरणका लागि मात्र हुन्।"),
    ("tui_controls", "नियन्त्रण: [j/k] खण्ड, [w/W] वार्ड, [i/I] सूचक, [l] भाषा, [Space] खोल्नुहोस्, [q] बन्द"),
    ("Diabetes Prevalence", "मधुमेहको व्यापकता"),
    ("Hypertension Prevalence", "उच्च रक्तचापको व्यापकता"),
    ("Flu Prevalence", "फ्लूको व्यापकता"),
    ("Access to Sanitation (%)", "सरसफाइमा पहुँच (%)"),
    ("Average Income (USD)", "औसत आय (USD)"),
    ("Number of Clinics", "क्लिनिक संख्या"),
    ("Average Age", "औसत उमेर"),
    ("Population", "जनसंख्या"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    #[test]
    fn plain_keys_resolve_to_table_value() {
        for lang in Lang::all() {
            for &(key, value) in table(*lang) {
                if !value.contains('{') {
                    assert_eq!(t(*lang, key).unwrap(), value, "{} key '{}'", lang, key);
                }
            }
        }
    }

    #[test]
    fn missing_key_returns_key_itself() {
        assert_eq!(t(Lang::En, "nonexistent.key").unwrap(), "nonexistent.key");
        assert_eq!(t(Lang::Ne, "nonexistent.key").unwrap(), "nonexistent.key");
    }

    #[test]
    fn missing_key_is_not_formatted() {
        // Braces in an unknown key are never treated as placeholders.
        assert_eq!(t(Lang::En, "unknown {thing}").unwrap(), "unknown {thing}");
    }

    #[test]
    fn languages_are_independent() {
        assert_eq!(t(Lang::En, "Population").unwrap(), "Population");
        assert_eq!(t(Lang::Ne, "Population").unwrap(), "जनसंख्या");
        assert_ne!(t(Lang::En, keys::ALL_WARDS).unwrap(), t(Lang::Ne, keys::ALL_WARDS).unwrap());
    }

    #[test]
    fn parameterized_keys_format() {
        assert_eq!(
            resolve(Lang::En, keys::CHART_BAR_TITLE, &[("indicator", "Population")]).unwrap(),
            "Population by Ward"
        );
        assert_eq!(
            resolve(Lang::Ne, keys::PER_1000, &[("value", "12.50")]).unwrap(),
            "प्रति १००० मा 12.50"
        );
    }

    #[test]
    fn parameterized_key_without_params_fails() {
        let err = t(Lang::En, keys::CHART_BAR_TITLE).unwrap_err();
        assert!(matches!(err, I18nError::MissingPlaceholder { ref name, .. } if name == "indicator"));
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
            assert_eq!(Lang::from_code(lang.native_name()), Some(*lang));
            assert_eq!(lang.code().parse::<Lang>().unwrap(), *lang);
        }
        assert_eq!(Lang::from_code(" NE "), Some(Lang::Ne));
        assert!(Lang::from_code("fr").is_none());
        assert!(matches!("fr".parse::<Lang>(), Err(I18nError::UnknownLanguage(_))));
    }

    #[test]
    fn next_cycles_through_all_languages() {
        let mut lang = Lang::default();
        for _ in Lang::all() {
            lang = lang.next();
        }
        assert_eq!(lang, Lang::default());
    }

    #[test]
    fn tables_have_same_key_count() {
        assert_eq!(NE.len(), EN.len(), "NE table key count mismatch");
    }
}
