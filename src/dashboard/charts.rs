// SPDX-License-Identifier: PMPL-1.0-or-later

//! Chart requests handed to the rendering layer.
//!
//! A request carries everything a renderer needs: localized title and axis
//! labels plus the raw series. Statistics the renderer derives itself (box
//! quartiles, histogram bins) are left to it.

use serde::Serialize;

use crate::data::{columns, stats, Dataset};
use crate::i18n::{self, keys, I18nError, Lang};
use crate::indicators::Indicator;

use super::WardSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Box,
    Pie,
    Scatter,
    Histogram,
    Heatmap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Categories { points: Vec<CategoryPoint> },
    Values { values: Vec<f64> },
    Points { points: Vec<XyPoint> },
    Matrix {
        labels: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    },
}

impl ChartData {
    /// Number of data points (cells for a matrix).
    pub fn len(&self) -> usize {
        match self {
            ChartData::Categories { points } => points.len(),
            ChartData::Values { values } => values.len(),
            ChartData::Points { points } => points.len(),
            ChartData::Matrix { values, .. } => values.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Ward to emphasise, when a single ward is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    pub data: ChartData,
}

/// Build the chart set for `indicator` over the whole dataset.
pub fn chart_requests(
    lang: Lang,
    dataset: &Dataset,
    indicator: Indicator,
    ward: &WardSelection,
) -> Result<Vec<ChartRequest>, I18nError> {
    let frame = &dataset.frame;
    let wards = dataset.wards();
    let values = frame.numbers(indicator.column()).unwrap_or(&[]);
    let label = indicator.label(lang)?;
    let ward_axis = i18n::t(lang, keys::AXIS_WARD)?;
    let highlight = match ward {
        WardSelection::Ward(name) if dataset.ward_row(name).is_some() => Some(name.clone()),
        _ => None,
    };

    let by_ward = |values: &[f64]| -> Vec<CategoryPoint> {
        wards
            .iter()
            .zip(values)
            .map(|(ward, &value)| CategoryPoint {
                label: ward.clone(),
                value,
            })
            .collect()
    };

    let mut charts = Vec::with_capacity(6);

    charts.push(ChartRequest {
        kind: ChartKind::Bar,
        title: i18n::resolve(lang, keys::CHART_BAR_TITLE, &[("indicator", label.as_str())])?,
        x_label: Some(ward_axis),
        y_label: Some(label.clone()),
        highlight: highlight.clone(),
        data: ChartData::Categories {
            points: by_ward(values),
        },
    });

    charts.push(ChartRequest {
        kind: ChartKind::Box,
        title: i18n::resolve(lang, keys::CHART_BOX_TITLE, &[("indicator", label.as_str())])?,
        x_label: None,
        y_label: Some(label.clone()),
        highlight: None,
        data: ChartData::Values {
            values: values.to_vec(),
        },
    });

    charts.push(ChartRequest {
        kind: ChartKind::Pie,
        title: i18n::t(lang, keys::CHART_PIE_TITLE)?,
        x_label: None,
        y_label: None,
        highlight: highlight.clone(),
        data: ChartData::Categories {
            points: by_ward(frame.numbers(columns::POPULATION).unwrap_or(&[])),
        },
    });

    let x_indicator = scatter_partner(indicator);
    let x_label = x_indicator.label(lang)?;
    let xs = frame.numbers(x_indicator.column()).unwrap_or(&[]);
    charts.push(ChartRequest {
        kind: ChartKind::Scatter,
        title: i18n::resolve(
            lang,
            keys::CHART_SCATTER_TITLE,
            &[("x", x_label.as_str()), ("y", label.as_str())],
        )?,
        x_label: Some(x_label.clone()),
        y_label: Some(label.clone()),
        highlight,
        data: ChartData::Points {
            points: wards
                .iter()
                .zip(xs.iter().zip(values))
                .map(|(ward, (&x, &y))| XyPoint {
                    label: ward.clone(),
                    x,
                    y,
                })
                .collect(),
        },
    });

    charts.push(ChartRequest {
        kind: ChartKind::Histogram,
        title: i18n::resolve(lang, keys::CHART_HISTOGRAM_TITLE, &[("indicator", label.as_str())])?,
        x_label: Some(label),
        y_label: Some(i18n::t(lang, keys::AXIS_FREQUENCY)?),
        highlight: None,
        data: ChartData::Values {
            values: values.to_vec(),
        },
    });

    let (names, matrix) = stats::correlation_matrix(frame);
    let labels = names
        .iter()
        .map(|name| heatmap_label(lang, name))
        .collect::<Result<Vec<_>, I18nError>>()?;
    charts.push(ChartRequest {
        kind: ChartKind::Heatmap,
        title: i18n::t(lang, keys::CHART_HEATMAP_TITLE)?,
        x_label: None,
        y_label: None,
        highlight: None,
        data: ChartData::Matrix {
            labels,
            values: matrix,
        },
    });

    Ok(charts)
}

/// Horizontal axis for the scatter chart: income, unless income is the
/// indicator itself.
fn scatter_partner(indicator: Indicator) -> Indicator {
    if indicator == Indicator::AverageIncome {
        Indicator::SanitationAccess
    } else {
        Indicator::AverageIncome
    }
}

/// Columns backing an indicator get its localized label; others keep their
/// column name.
fn heatmap_label(lang: Lang, column: &str) -> Result<String, I18nError> {
    match Indicator::all().iter().find(|i| i.column() == column) {
        Some(indicator) => indicator.label(lang),
        None => Ok(column.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{derived_columns, parse_csv};

    fn dataset() -> Dataset {
        let src = "Ward,Population,Diabetes_Cases,Hypertension_Cases,Flu_Cases,Access_to_Sanitation_Pct,Avg_Income_USD,Num_Clinics,Avg_Age\n\
                   A,1000,50,80,20,70,300,2,31\n\
                   B,2000,60,100,10,85,450,3,35\n\
                   C,500,5,40,15,55,220,1,29\n";
        Dataset {
            frame: derived_columns(parse_csv(src.as_bytes()).unwrap()).unwrap(),
            source: None,
            fingerprint: None,
        }
    }

    #[test]
    fn builds_every_chart_kind() {
        let charts =
            chart_requests(Lang::En, &dataset(), Indicator::Population, &WardSelection::All)
                .unwrap();
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Bar,
                ChartKind::Box,
                ChartKind::Pie,
                ChartKind::Scatter,
                ChartKind::Histogram,
                ChartKind::Heatmap
            ]
        );
        assert_eq!(charts[0].title, "Population by Ward");
        assert!(charts.iter().all(|c| c.highlight.is_none()));
    }

    #[test]
    fn bar_chart_series_follows_ward_order() {
        let charts = chart_requests(
            Lang::En,
            &dataset(),
            Indicator::DiabetesPrevalence,
            &WardSelection::Ward("B".into()),
        )
        .unwrap();
        match &charts[0].data {
            ChartData::Categories { points } => {
                let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
                assert_eq!(labels, vec!["A", "B", "C"]);
                assert_eq!(points[0].value, 50.0);
                assert_eq!(points[1].value, 30.0);
            }
            other => panic!("unexpected bar data: {:?}", other),
        }
        assert_eq!(charts[0].highlight.as_deref(), Some("B"));
    }

    #[test]
    fn titles_are_localized() {
        let charts =
            chart_requests(Lang::Ne, &dataset(), Indicator::Population, &WardSelection::All)
                .unwrap();
        assert_eq!(charts[0].title, "वार्ड अनुसार जनसंख्या");
        assert_eq!(charts[0].x_label.as_deref(), Some("वार्ड"));
        assert_eq!(charts[3].title, "जनसंख्या बनाम औसत आय (USD)");
    }

    #[test]
    fn heatmap_uses_indicator_labels_for_backing_columns() {
        let charts =
            chart_requests(Lang::En, &dataset(), Indicator::AverageAge, &WardSelection::All)
                .unwrap();
        match &charts[5].data {
            ChartData::Matrix { labels, values } => {
                assert!(labels.contains(&"Population".to_string()));
                assert!(labels.contains(&"Diabetes_Cases".to_string()));
                assert!(labels.contains(&"Diabetes Prevalence".to_string()));
                assert_eq!(values.len(), labels.len());
            }
            other => panic!("unexpected heatmap data: {:?}", other),
        }
    }

    #[test]
    fn scatter_partner_avoids_self() {
        assert_eq!(scatter_partner(Indicator::AverageIncome), Indicator::SanitationAccess);
        assert_eq!(scatter_partner(Indicator::Population), Indicator::AverageIncome);
    }
}
