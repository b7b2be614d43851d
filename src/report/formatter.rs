// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering of a dashboard view

use colored::*;

use crate::dashboard::{
    format_decimal, ChartData, ChartRequest, DashboardView, NoticeLevel, WardSelection,
    ALL_WARDS_VALUE,
};

const BAR_WIDTH: usize = 30;
const HISTOGRAM_BINS: usize = 5;

pub struct ViewFormatter;

impl ViewFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, view: &DashboardView) {
        println!("\n{}", view.title.bold().cyan());
        println!("{}", view.sidebar.title.dimmed());
        println!();

        self.print_notices(view);
        self.print_selection(view);
        println!();

        if !view.metrics.is_empty() {
            println!("{}", view.metrics_header.bold().yellow());
            for line in self.metric_lines(view) {
                println!("  {}", line);
            }
            println!();
        }

        if let Some(detail) = &view.detail {
            println!("{}", detail.header.bold().yellow());
            println!("  {}: {}", detail.indicator_label, detail.formatted.bold());
            println!();
        }

        if let Some(raw) = &view.raw_data {
            println!("{}", raw.title.bold().yellow());
            for line in self.raw_data_lines(view) {
                println!("  {}", line);
            }
            println!();
        }

        if !view.charts.is_empty() {
            println!("{}", view.charts_header.bold().yellow());
            for chart in &view.charts {
                println!("  {}", chart.title.bold());
                for line in self.chart_lines(chart) {
                    println!("    {}", line);
                }
                println!();
            }
        }

        println!("{}", view.sidebar.info.dimmed());
    }

    fn print_notices(&self, view: &DashboardView) {
        if view.notices.is_empty() {
            return;
        }
        for notice in &view.notices {
            let message = match notice.level {
                NoticeLevel::Error => notice.message.red().bold(),
                NoticeLevel::Warning => notice.message.yellow(),
                NoticeLevel::Info => notice.message.blue(),
            };
            println!("  {}", message);
        }
        println!();
    }

    fn print_selection(&self, view: &DashboardView) {
        let ward = view
            .sidebar
            .ward_options
            .iter()
            .find(|option| match &view.selection.ward {
                WardSelection::All => option.value == ALL_WARDS_VALUE,
                WardSelection::Ward(name) => &option.value == name,
            })
            .map(|option| option.label.clone())
            .unwrap_or_else(|| match &view.selection.ward {
                WardSelection::Ward(name) => name.clone(),
                WardSelection::All => String::new(),
            });
        println!("  {} {}", view.sidebar.ward_prompt, ward.bold());
        println!(
            "  {} {}",
            view.sidebar.indicator_prompt,
            view.selection.indicator_label.as_deref().unwrap_or("-").bold()
        );
    }

    /// `label: value` lines for the key metrics block.
    pub fn metric_lines(&self, view: &DashboardView) -> Vec<String> {
        view.metrics
            .iter()
            .map(|metric| format!("{}: {}", metric.label, metric.value))
            .collect()
    }

    /// The raw data table, one line per row plus a header.
    pub fn raw_data_lines(&self, view: &DashboardView) -> Vec<String> {
        let Some(raw) = &view.raw_data else {
            return Vec::new();
        };
        let Some(first) = raw.records.first() else {
            return Vec::new();
        };
        let mut lines = Vec::with_capacity(raw.records.len() + 1);
        lines.push(first.keys().cloned().collect::<Vec<_>>().join(" | "));
        for record in &raw.records {
            lines.push(
                record
                    .values()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
        }
        lines
    }

    /// Text rendering of one chart request.
    pub fn chart_lines(&self, chart: &ChartRequest) -> Vec<String> {
        match &chart.data {
            ChartData::Categories { points } => {
                let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
                let width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
                points
                    .iter()
                    .map(|point| {
                        let marker = if chart.highlight.as_deref() == Some(point.label.as_str()) {
                            "*"
                        } else {
                            " "
                        };
                        format!(
                            "{}{:<width$} {} {}",
                            marker,
                            point.label,
                            bar(point.value, max),
                            format_decimal(point.value),
                            width = width
                        )
                    })
                    .collect()
            }
            ChartData::Values { values } => value_summary(values),
            ChartData::Points { points } => points
                .iter()
                .map(|point| {
                    format!(
                        "{}: ({}, {})",
                        point.label,
                        format_decimal(point.x),
                        format_decimal(point.y)
                    )
                })
                .collect(),
            ChartData::Matrix { labels, values } => labels
                .iter()
                .zip(values)
                .map(|(label, row)| {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|cell| match cell {
                            Some(r) => format!("{:>5.2}", r),
                            None => "    -".to_string(),
                        })
                        .collect();
                    format!("{} {}", cells.join(" "), label)
                })
                .collect(),
        }
    }
}

impl Default for ViewFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(1))
}

/// Min, median, max and a coarse histogram for a value series.
fn value_summary(values: &[f64]) -> Vec<String> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let mut lines = vec![format!(
        "n={} min={} median={} max={}",
        sorted.len(),
        format_decimal(min),
        format_decimal(median),
        format_decimal(max)
    )];

    let span = max - min;
    if span > 0.0 {
        let mut counts = [0usize; HISTOGRAM_BINS];
        for value in &sorted {
            let bin = (((value - min) / span) * HISTOGRAM_BINS as f64) as usize;
            counts[bin.min(HISTOGRAM_BINS - 1)] += 1;
        }
        let step = span / HISTOGRAM_BINS as f64;
        for (i, count) in counts.iter().enumerate() {
            let lower = min + step * i as f64;
            lines.push(format!(
                "[{:>9} .. {:>9}) {}",
                format_decimal(lower),
                format_decimal(lower + step),
                "#".repeat(*count)
            ));
        }
    }
    lines
}
