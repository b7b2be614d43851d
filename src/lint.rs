// SPDX-License-Identifier: PMPL-1.0-or-later

//! Consistency checks over the translation tables and the indicator catalog.
//!
//! Run by `ward-health lint` and `ward-health doctor`, and once at startup
//! so gaps show up in the log.

use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::i18n::{self, keys, placeholders, I18nError, Lang};
use crate::indicators::{DisplayLabelIndex, Indicator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintFinding {
    /// A key the UI or catalog needs has no entry for `lang`.
    MissingKey { lang: Lang, key: String },
    /// A template uses different placeholders than the English one.
    PlaceholderMismatch {
        lang: Lang,
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// Several indicators share one display label in `lang`.
    LabelCollision {
        lang: Lang,
        label: String,
        indicators: Vec<Indicator>,
    },
    /// An entry nothing refers to.
    UnusedKey { lang: Lang, key: String },
}

impl LintFinding {
    /// Unused keys are reported but do not fail the lint.
    pub fn is_error(&self) -> bool {
        !matches!(self, LintFinding::UnusedKey { .. })
    }
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintFinding::MissingKey { lang, key } => {
                write!(f, "[{}] missing translation for `{}`", lang, key)
            }
            LintFinding::PlaceholderMismatch {
                lang,
                key,
                expected,
                found,
            } => write!(
                f,
                "[{}] `{}` uses placeholders {:?}, expected {:?}",
                lang, key, found, expected
            ),
            LintFinding::LabelCollision {
                lang,
                label,
                indicators,
            } => {
                let names: Vec<&str> = indicators.iter().map(|i| i.canonical_key()).collect();
                write!(
                    f,
                    "[{}] label `{}` is shared by {}; `{}` wins",
                    lang,
                    label,
                    names.join(", "),
                    names.first().copied().unwrap_or_default()
                )
            }
            LintFinding::UnusedKey { lang, key } => {
                write!(f, "[{}] unused translation `{}`", lang, key)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub findings: Vec<LintFinding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        !self.findings.iter().any(LintFinding::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    /// Emit every finding as a `warn!` event.
    pub fn log(&self) {
        for finding in &self.findings {
            warn!(%finding, "catalog lint");
        }
    }
}

/// Keys every language must define: UI keys plus indicator canonical keys.
pub fn required_keys() -> Vec<&'static str> {
    keys::ALL
        .iter()
        .copied()
        .chain(Indicator::all().iter().map(|i| i.canonical_key()))
        .collect()
}

/// Lint the built-in tables and catalog.
pub fn lint_catalog() -> Result<LintReport, I18nError> {
    let required = required_keys();
    let reference = i18n::table(Lang::En);
    let mut findings = Vec::new();

    for lang in Lang::all() {
        findings.extend(check_table(*lang, i18n::table(*lang), reference, &required));
        let index = DisplayLabelIndex::build(*lang)?;
        findings.extend(
            index
                .collisions()
                .into_iter()
                .map(|(label, indicators)| LintFinding::LabelCollision {
                    lang: *lang,
                    label,
                    indicators,
                }),
        );
    }

    Ok(LintReport { findings })
}

/// Compare one language table against the required keys and against the
/// placeholders used by `reference`.
pub fn check_table(
    lang: Lang,
    table: &[(&str, &str)],
    reference: &[(&str, &str)],
    required: &[&str],
) -> Vec<LintFinding> {
    let lookup = |table: &[(&str, &str)], key: &str| {
        table.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    };
    let mut findings = Vec::new();

    for key in required {
        let Some(template) = lookup(table, *key) else {
            findings.push(LintFinding::MissingKey {
                lang,
                key: key.to_string(),
            });
            continue;
        };
        let Some(reference) = lookup(reference, *key) else {
            continue;
        };
        let mut expected = placeholders(&reference);
        let mut found = placeholders(&template);
        expected.sort();
        found.sort();
        if expected != found {
            findings.push(LintFinding::PlaceholderMismatch {
                lang,
                key: key.to_string(),
                expected,
                found,
            });
        }
    }

    for (key, _) in table {
        if !required.contains(key) {
            findings.push(LintFinding::UnusedKey {
                lang,
                key: key.to_string(),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &[(&str, &str)] = &[
        ("title", "Title"),
        ("per_1000", "{value} per 1000"),
        ("Population", "Population"),
    ];
    const REQUIRED: &[&str] = &["title", "per_1000", "Population"];

    #[test]
    fn built_in_catalog_is_clean() {
        let report = lint_catalog().unwrap();
        assert!(report.findings.is_empty(), "findings: {:?}", report.findings);
        assert!(report.is_clean());
    }

    #[test]
    fn reports_missing_key() {
        let table: &[(&str, &str)] = &[("title", "Titre"), ("per_1000", "{value} pour 1000")];
        let findings = check_table(Lang::Ne, table, REFERENCE, REQUIRED);
        assert_eq!(
            findings,
            vec![LintFinding::MissingKey {
                lang: Lang::Ne,
                key: "Population".into()
            }]
        );
    }

    #[test]
    fn reports_placeholder_mismatch() {
        let table: &[(&str, &str)] = &[
            ("title", "Titre"),
            ("per_1000", "{valeur} pour 1000"),
            ("Population", "Population"),
        ];
        let findings = check_table(Lang::Ne, table, REFERENCE, REQUIRED);
        assert_eq!(findings.len(), 1);
        match &findings[0] {
            LintFinding::PlaceholderMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, &vec!["value".to_string()]);
                assert_eq!(found, &vec!["valeur".to_string()]);
            }
            other => panic!("unexpected finding: {:?}", other),
        }
    }

    #[test]
    fn unused_keys_do_not_fail() {
        let table: &[(&str, &str)] = &[
            ("title", "Title"),
            ("per_1000", "{value} per 1000"),
            ("Population", "Population"),
            ("legacy", "Old"),
        ];
        let report = LintReport {
            findings: check_table(Lang::En, table, REFERENCE, REQUIRED),
        };
        assert_eq!(report.findings.len(), 1);
        assert!(report.is_clean());
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn collision_message_names_winner() {
        let finding = LintFinding::LabelCollision {
            lang: Lang::En,
            label: "Rate".into(),
            indicators: vec![Indicator::DiabetesPrevalence, Indicator::FluPrevalence],
        };
        assert_eq!(
            finding.to_string(),
            "[en] label `Rate` is shared by Diabetes Prevalence, Flu Prevalence; `Diabetes Prevalence` wins"
        );
        assert!(finding.is_error());
    }
}
