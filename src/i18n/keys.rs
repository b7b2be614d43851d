// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation keys referenced by the dashboard UI.
//!
//! Every key here must be defined for every [`Lang`](super::Lang);
//! `ward-health lint` reports any gaps.

pub const HUB_TITLE: &str = "hub_title";
pub const FILTERS_OPTIONS: &str = "filters_options";
pub const SELECT_LANGUAGE: &str = "select_language";
pub const SELECT_WARD: &str = "select_ward";
pub const ALL_WARDS: &str = "all_wards";
pub const SELECT_INDICATOR: &str = "select_indicator_bar_box";
pub const DASHBOARD_TITLE: &str = "dashboard_title";
pub const KEY_METRICS_HEADER: &str = "key_metrics_header";
pub const TOTAL_POPULATION: &str = "total_population";
pub const AVG_DIABETES_PREV: &str = "avg_diabetes_prev";
pub const AVG_HYPERTENSION_PREV: &str = "avg_hypertension_prev";
pub const AVG_FLU_PREV: &str = "avg_flu_prev";
pub const TOTAL_CLINICS: &str = "total_clinics";
/// `{value}`
pub const PER_1000: &str = "per_1000";
pub const VIEW_RAW_DATA: &str = "view_raw_data";
/// `{ward}`
pub const WARD_DETAIL_HEADER: &str = "ward_detail_header";
/// `{ward}`
pub const WARD_MISSING: &str = "ward_missing";
pub const CHARTS_HEADER: &str = "charts_header";
/// `{indicator}`
pub const CHART_BAR_TITLE: &str = "chart_bar_title";
/// `{indicator}`
pub const CHART_BOX_TITLE: &str = "chart_box_title";
pub const CHART_PIE_TITLE: &str = "chart_pie_title";
/// `{x}`, `{y}`
pub const CHART_SCATTER_TITLE: &str = "chart_scatter_title";
/// `{indicator}`
pub const CHART_HISTOGRAM_TITLE: &str = "chart_histogram_title";
pub const CHART_HEATMAP_TITLE: &str = "chart_heatmap_title";
pub const AXIS_WARD: &str = "axis_ward";
pub const AXIS_FREQUENCY: &str = "axis_frequency";
pub const WARN_DATA_NOT_LOADED: &str = "warn_data_not_loaded";
/// `{path}`
pub const ERR_FILE_NOT_FOUND: &str = "err_file_not_found";
/// `{reason}`
pub const ERR_DATA: &str = "err_data";
pub const WARN_SELECT_INDICATOR: &str = "warn_select_indicator";
pub const INFO_SELECT_INDICATOR: &str = "info_select_indicator";
pub const SIDEBAR_INFO: &str = "sidebar_info";
pub const TUI_CONTROLS: &str = "tui_controls";

/// All UI keys, in table order.
pub const ALL: &[&str] = &[
    HUB_TITLE,
    FILTERS_OPTIONS,
    SELECT_LANGUAGE,
    SELECT_WARD,
    ALL_WARDS,
    SELECT_INDICATOR,
    DASHBOARD_TITLE,
    KEY_METRICS_HEADER,
    TOTAL_POPULATION,
    AVG_DIABETES_PREV,
    AVG_HYPERTENSION_PREV,
    AVG_FLU_PREV,
    TOTAL_CLINICS,
    PER_1000,
    VIEW_RAW_DATA,
    WARD_DETAIL_HEADER,
    WARD_MISSING,
    CHARTS_HEADER,
    CHART_BAR_TITLE,
    CHART_BOX_TITLE,
    CHART_PIE_TITLE,
    CHART_SCATTER_TITLE,
    CHART_HISTOGRAM_TITLE,
    CHART_HEATMAP_TITLE,
    AXIS_WARD,
    AXIS_FREQUENCY,
    WARN_DATA_NOT_LOADED,
    ERR_FILE_NOT_FOUND,
    ERR_DATA,
    WARN_SELECT_INDICATOR,
    INFO_SELECT_INDICATOR,
    SIDEBAR_INFO,
    TUI_CONTROLS,
];
