// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dashboard view model.
//!
//! [`build_view`] turns a session, a dataset and the user's selector choices
//! (as display labels) into a fully localized [`DashboardView`]. It runs once
//! per interaction; the console printer, the TUI and the exporters all
//! consume the same view.

pub mod charts;
pub mod format;

use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::data::{columns, load_dataset, stats, Cell, DataError, Dataset};
use crate::i18n::{keys, I18nError, Lang};
use crate::indicators::Indicator;
use crate::session::Session;

pub use charts::{chart_requests, CategoryPoint, ChartData, ChartKind, ChartRequest, XyPoint};
pub use format::{format_count, format_decimal, format_indicator_value, thousands};

/// Option value of the "All Wards" entry in the ward selector, whatever its
/// localized label.
pub const ALL_WARDS_VALUE: &str = "All Wards";

/// Selector choices as the UI reports them: localized display labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Ward selector label; `None` means the default ("All Wards").
    pub ward: Option<String>,
    /// Indicator selector label; `None` means the first option.
    pub indicator: Option<String>,
}

impl Selection {
    pub fn new(ward: Option<String>, indicator: Option<String>) -> Self {
        Self { ward, indicator }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "ward")]
pub enum WardSelection {
    All,
    Ward(String),
}

impl WardSelection {
    /// Map a ward selector label back to a selection. `all_wards_label` is
    /// the localized "All Wards" sentinel for the active language.
    pub fn from_label(label: Option<&str>, all_wards_label: &str) -> Self {
        match label {
            None => WardSelection::All,
            Some(label) if label == all_wards_label => WardSelection::All,
            Some(label) => WardSelection::Ward(label.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// One entry of a selector widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub title: String,
    pub filters_header: String,
    pub language_prompt: String,
    pub language_options: Vec<SelectOption>,
    pub ward_prompt: String,
    pub ward_options: Vec<SelectOption>,
    pub indicator_prompt: String,
    pub indicator_options: Vec<SelectOption>,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardDetail {
    pub header: String,
    pub ward: String,
    pub indicator_label: String,
    pub value: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawDataView {
    pub title: String,
    pub records: Vec<IndexMap<String, Cell>>,
}

/// What the selectors resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSelection {
    pub ward: WardSelection,
    pub indicator: Option<Indicator>,
    pub indicator_label: Option<String>,
    pub column: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub lang: Lang,
    pub title: String,
    pub sidebar: Sidebar,
    pub notices: Vec<Notice>,
    pub selection: ResolvedSelection,
    pub metrics_header: String,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<WardDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<RawDataView>,
    pub charts_header: String,
    pub charts: Vec<ChartRequest>,
}

/// Build the dashboard for one interaction.
///
/// `load_error` is the reason `dataset` is empty, if loading failed. Data
/// problems become notices; only translation template mismatches fail.
pub fn build_view(
    session: &mut Session,
    dataset: &Dataset,
    load_error: Option<&DataError>,
    selection: &Selection,
) -> Result<DashboardView, I18nError> {
    let lang = session.lang();
    let mut notices = Vec::new();

    if let Some(err) = load_error {
        notices.push(Notice {
            level: NoticeLevel::Error,
            message: load_error_message(session, err)?,
        });
    }
    if dataset.is_empty() {
        notices.push(Notice {
            level: NoticeLevel::Warning,
            message: session.t(keys::WARN_DATA_NOT_LOADED)?,
        });
    }

    // Ward selector
    let all_wards = session.t(keys::ALL_WARDS)?;
    let ward = WardSelection::from_label(selection.ward.as_deref(), &all_wards);
    let mut ward_options = vec![SelectOption {
        label: all_wards.clone(),
        value: ALL_WARDS_VALUE.to_string(),
    }];
    ward_options.extend(dataset.wards().iter().map(|name| SelectOption {
        label: name.clone(),
        value: name.clone(),
    }));

    // Indicator selector
    let (indicator_options, indicator) = {
        let index = session.label_index()?;
        let options: Vec<SelectOption> = if dataset.is_empty() {
            Vec::new()
        } else {
            index
                .options()
                .into_iter()
                .map(|(label, indicator)| SelectOption {
                    label: label.to_string(),
                    value: indicator.canonical_key().to_string(),
                })
                .collect()
        };
        let indicator = match selection.indicator.as_deref() {
            Some(label) => index.lookup(label),
            None => options
                .first()
                .and_then(|option| Indicator::from_canonical_key(&option.value)),
        };
        (options, indicator)
    };
    let indicator_label = indicator.map(|i| i.label(lang)).transpose()?;
    debug!(?ward, ?indicator, lang = %lang, "resolved selection");

    if indicator.is_none() {
        notices.push(Notice {
            level: NoticeLevel::Warning,
            message: session.t(keys::WARN_SELECT_INDICATOR)?,
        });
        if !dataset.is_empty() {
            notices.push(Notice {
                level: NoticeLevel::Info,
                message: session.t(keys::INFO_SELECT_INDICATOR)?,
            });
        }
    }

    let sidebar = Sidebar {
        title: session.t(keys::HUB_TITLE)?,
        filters_header: session.t(keys::FILTERS_OPTIONS)?,
        language_prompt: session.t(keys::SELECT_LANGUAGE)?,
        language_options: Lang::all()
            .iter()
            .map(|l| SelectOption {
                label: l.native_name().to_string(),
                value: l.code().to_string(),
            })
            .collect(),
        ward_prompt: session.t(keys::SELECT_WARD)?,
        ward_options,
        indicator_prompt: session.t(keys::SELECT_INDICATOR)?,
        indicator_options,
        info: session.t(keys::SIDEBAR_INFO)?,
    };

    let mut metrics = Vec::new();
    let mut detail = None;
    let mut raw_data = None;
    let mut charts = Vec::new();

    if let Some(indicator) = indicator.filter(|_| !dataset.is_empty()) {
        metrics = key_metrics(session, dataset)?;

        match &ward {
            WardSelection::Ward(name) => match dataset.ward_row(name) {
                Some(row) => detail = ward_detail(session, dataset, indicator, name, row)?,
                None => notices.push(Notice {
                    level: NoticeLevel::Info,
                    message: session.resolve(keys::WARD_MISSING, &[("ward", name.as_str())])?,
                }),
            },
            WardSelection::All => {}
        }

        raw_data = Some(raw_data_view(session, dataset, &ward)?);
        charts = chart_requests(lang, dataset, indicator, &ward)?;
    }

    Ok(DashboardView {
        lang,
        title: session.t(keys::DASHBOARD_TITLE)?,
        sidebar,
        notices,
        selection: ResolvedSelection {
            ward,
            indicator,
            indicator_label,
            column: indicator.map(|i| i.column()),
        },
        metrics_header: session.t(keys::KEY_METRICS_HEADER)?,
        metrics,
        detail,
        raw_data,
        charts_header: session.t(keys::CHARTS_HEADER)?,
        charts,
    })
}

/// Load the dataset at `path` and build the view over it. A load failure
/// yields an empty dataset and an error notice rather than an `Err`.
pub fn build_view_from_path(
    session: &mut Session,
    path: &Path,
    selection: &Selection,
) -> Result<(Dataset, DashboardView), I18nError> {
    let (dataset, error) = match load_dataset(path) {
        Ok(dataset) => (dataset, None),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "dataset not loaded");
            (Dataset::empty(), Some(err))
        }
    };
    let view = build_view(session, &dataset, error.as_ref(), selection)?;
    Ok((dataset, view))
}

fn load_error_message(session: &Session, err: &DataError) -> Result<String, I18nError> {
    match err {
        DataError::NotFound { path } => {
            let path = path.display().to_string();
            session.resolve(keys::ERR_FILE_NOT_FOUND, &[("path", path.as_str())])
        }
        other => {
            let reason = other.to_string();
            session.resolve(keys::ERR_DATA, &[("reason", reason.as_str())])
        }
    }
}

/// City-wide metrics, independent of the ward and indicator selection.
fn key_metrics(session: &Session, dataset: &Dataset) -> Result<Vec<Metric>, I18nError> {
    let frame = &dataset.frame;
    let mut metrics = Vec::new();

    if let Ok(population) = frame.numbers(columns::POPULATION) {
        metrics.push(Metric {
            label: session.t(keys::TOTAL_POPULATION)?,
            value: format_count(stats::sum(population)),
        });
    }

    for (key, column) in [
        (keys::AVG_DIABETES_PREV, columns::DIABETES_PER_1000),
        (keys::AVG_HYPERTENSION_PREV, columns::HYPERTENSION_PER_1000),
        (keys::AVG_FLU_PREV, columns::FLU_PER_1000),
    ] {
        let Some(mean) = frame.numbers(column).ok().and_then(stats::mean) else {
            continue;
        };
        let value = format_decimal(mean);
        metrics.push(Metric {
            label: session.t(key)?,
            value: session.resolve(keys::PER_1000, &[("value", value.as_str())])?,
        });
    }

    if let Ok(clinics) = frame.numbers(columns::NUM_CLINICS) {
        metrics.push(Metric {
            label: session.t(keys::TOTAL_CLINICS)?,
            value: format_count(stats::sum(clinics)),
        });
    }

    Ok(metrics)
}

fn ward_detail(
    session: &Session,
    dataset: &Dataset,
    indicator: Indicator,
    ward: &str,
    row: usize,
) -> Result<Option<WardDetail>, I18nError> {
    let Some(value) = dataset
        .frame
        .numbers(indicator.column())
        .ok()
        .and_then(|values| values.get(row).copied())
    else {
        return Ok(None);
    };

    Ok(Some(WardDetail {
        header: session.resolve(keys::WARD_DETAIL_HEADER, &[("ward", ward)])?,
        ward: ward.to_string(),
        indicator_label: indicator.label(session.lang())?,
        value,
        formatted: format_indicator_value(indicator, value),
    }))
}

fn raw_data_view(
    session: &Session,
    dataset: &Dataset,
    ward: &WardSelection,
) -> Result<RawDataView, I18nError> {
    let records = match ward {
        WardSelection::All => dataset.frame.records(),
        WardSelection::Ward(name) => match dataset.ward_row(name) {
            Some(row) => dataset.frame.select_rows(&[row]).records(),
            None => Vec::new(),
        },
    };
    Ok(RawDataView {
        title: session.t(keys::VIEW_RAW_DATA)?,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{derived_columns, parse_csv};

    fn dataset() -> Dataset {
        let src = "Ward,Population,Diabetes_Cases,Hypertension_Cases,Flu_Cases,Access_to_Sanitation_Pct,Avg_Income_USD,Num_Clinics,Avg_Age\n\
                   A,1000,50,80,20,70,300,2,31\n\
                   B,12345,60,100,10,85,450,3,35\n\
                   C,0,0,0,0,55,220,1,29\n";
        Dataset {
            frame: derived_columns(parse_csv(src.as_bytes()).unwrap()).unwrap(),
            source: None,
            fingerprint: None,
        }
    }

    #[test]
    fn ward_detail_reads_selected_row() {
        let mut session = Session::new(Lang::En);
        let selection = Selection::new(Some("B".into()), Some("Population".into()));
        let view = build_view(&mut session, &dataset(), None, &selection).unwrap();

        let detail = view.detail.expect("ward B detail");
        assert_eq!(detail.ward, "B");
        assert_eq!(detail.value, 12345.0);
        assert_eq!(detail.formatted, "12,345");
        assert_eq!(detail.header, "Ward Details: B");
        assert_eq!(view.raw_data.unwrap().records.len(), 1);
    }

    #[test]
    fn default_selection_is_all_wards_and_first_indicator() {
        let mut session = Session::new(Lang::En);
        let view = build_view(&mut session, &dataset(), None, &Selection::default()).unwrap();
        assert_eq!(view.selection.ward, WardSelection::All);
        assert_eq!(view.selection.indicator, Some(Indicator::DiabetesPrevalence));
        assert_eq!(view.selection.column, Some("Diabetes_Prevalence_per_1000"));
        assert!(view.detail.is_none());
        assert_eq!(view.raw_data.unwrap().records.len(), 3);
        assert!(view.notices.is_empty());
    }

    #[test]
    fn key_metrics_are_formatted() {
        let mut session = Session::new(Lang::En);
        let view = build_view(&mut session, &dataset(), None, &Selection::default()).unwrap();
        assert_eq!(view.metrics[0].label, "Total Population");
        assert_eq!(view.metrics[0].value, "13,345");
        // (50 + 4.86 + 0) / 3
        assert_eq!(view.metrics[1].value, "18.29 per 1000");
        assert_eq!(view.metrics.last().unwrap().value, "6");
    }

    #[test]
    fn localized_all_wards_label_maps_to_all() {
        let mut session = Session::new(Lang::Ne);
        let selection = Selection::new(Some("सबै वार्डहरू".into()), Some("जनसंख्या".into()));
        let view = build_view(&mut session, &dataset(), None, &selection).unwrap();
        assert_eq!(view.selection.ward, WardSelection::All);
        assert_eq!(view.selection.indicator, Some(Indicator::Population));
        assert_eq!(view.sidebar.ward_options[0].label, "सबै वार्डहरू");
        assert_eq!(view.sidebar.ward_options.len(), 4);
    }

    #[test]
    fn unknown_indicator_label_is_no_selection() {
        let mut session = Session::new(Lang::Ne);
        // English label while the session is in Nepali.
        let selection = Selection::new(None, Some("Population".into()));
        let view = build_view(&mut session, &dataset(), None, &selection).unwrap();
        assert_eq!(view.selection.indicator, None);
        assert!(view.charts.is_empty());
        assert!(view.metrics.is_empty());
        assert!(view
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Warning && n.message == "कृपया एउटा सूचक छान्नुहोस्।"));
    }

    #[test]
    fn stale_ward_skips_detail() {
        let mut session = Session::new(Lang::En);
        let selection = Selection::new(Some("Z".into()), None);
        let view = build_view(&mut session, &dataset(), None, &selection).unwrap();
        assert_eq!(view.selection.ward, WardSelection::Ward("Z".into()));
        assert!(view.detail.is_none());
        assert_eq!(view.raw_data.unwrap().records.len(), 0);
        assert!(view
            .notices
            .iter()
            .any(|n| n.message == "Ward Z is not present in the loaded data."));
    }

    #[test]
    fn load_failure_degrades_to_notices() {
        let mut session = Session::new(Lang::En);
        let err = DataError::NotFound {
            path: "urban_health_data.csv".into(),
        };
        let view =
            build_view(&mut session, &Dataset::empty(), Some(&err), &Selection::default()).unwrap();
        assert_eq!(view.notices[0].level, NoticeLevel::Error);
        assert_eq!(
            view.notices[0].message,
            "Error: The file urban_health_data.csv was not found."
        );
        assert!(view.sidebar.indicator_options.is_empty());
        assert_eq!(view.sidebar.ward_options.len(), 1);
        assert!(view.charts.is_empty());
    }
}
