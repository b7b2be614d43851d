// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lightweight terminal UI for browsing the dashboard
//!
//! Every key press is one interaction: the selection is re-resolved through
//! the session's label index and the whole view is rebuilt.

use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::dashboard::{build_view, DashboardView, NoticeLevel, Selection, WardSelection};
use crate::data::{Dataset, DatasetCache};
use crate::i18n::{self, keys};
use crate::report::formatter::ViewFormatter;
use crate::session::Session;

pub struct DashboardTui {
    session: Session,
    cache: DatasetCache,
    data_path: PathBuf,
    /// Position in the ward selector; 0 is "All Wards".
    ward: usize,
    /// Position in the indicator selector.
    indicator: usize,
}

impl DashboardTui {
    pub fn new(session: Session, data_path: PathBuf) -> Self {
        Self {
            session,
            cache: DatasetCache::new(),
            data_path,
            ward: 0,
            indicator: 0,
        }
    }

    pub fn run(mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = self.run_inner();
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(&mut self) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let mut selected = 0;
        let mut expanded = Vec::new();
        let formatter = ViewFormatter::new();

        loop {
            let view = self.view()?;
            let sections = build_sections(&view, &formatter);
            if expanded.len() != sections.len() {
                expanded = vec![false; sections.len()];
                selected = selected.min(sections.len().saturating_sub(1));
            }

            render(&mut stdout, &view, &sections, selected, &expanded)?;

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            let Event::Key(KeyEvent {
                code, modifiers, ..
            }) = event::read()?
            else {
                continue;
            };
            let wards = view.sidebar.ward_options.len().max(1);
            let indicators = view.sidebar.indicator_options.len().max(1);
            let count = sections.len().max(1);

            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if modifiers == KeyModifiers::CONTROL => break,
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                    selected = (selected + 1) % count;
                }
                KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                    selected = (selected + count - 1) % count;
                }
                KeyCode::Char(' ') => {
                    if let Some(flag) = expanded.get_mut(selected) {
                        *flag = !*flag;
                    }
                }
                KeyCode::Char('w') => self.ward = (self.ward + 1) % wards,
                KeyCode::Char('W') => self.ward = (self.ward + wards - 1) % wards,
                KeyCode::Char('i') => self.indicator = (self.indicator + 1) % indicators,
                KeyCode::Char('I') => {
                    self.indicator = (self.indicator + indicators - 1) % indicators
                }
                KeyCode::Char('l') => {
                    let next = self.session.lang().next();
                    self.session.set_language(next);
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Rebuild the view for the current selector positions.
    fn view(&mut self) -> Result<DashboardView> {
        let selection = self.selection()?;
        let empty = Dataset::empty();
        let (dataset, error) = match self.cache.get_or_load(&self.data_path) {
            Ok(dataset) => (dataset, None),
            Err(err) => (&empty, Some(err)),
        };
        Ok(build_view(&mut self.session, dataset, error.as_ref(), &selection)?)
    }

    /// Selector positions mapped to display labels in the active language.
    fn selection(&mut self) -> Result<Selection> {
        let ward = match self.ward {
            0 => None,
            n => match self.cache.get_or_load(&self.data_path) {
                Ok(dataset) => dataset.wards().get(n - 1).cloned(),
                Err(_) => None,
            },
        };
        let indicator = self
            .session
            .label_index()?
            .options()
            .get(self.indicator)
            .map(|(label, _)| label.to_string());
        Ok(Selection::new(ward, indicator))
    }
}

fn render(
    stdout: &mut impl Write,
    view: &DashboardView,
    sections: &[Section],
    selected: usize,
    expanded: &[bool],
) -> Result<()> {
    execute!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    // Raw mode needs explicit carriage returns.
    write!(stdout, "{}\r\n", view.title.bold().cyan())?;
    write!(
        stdout,
        "{} {}  {} {}  {} {}\r\n\r\n",
        view.sidebar.language_prompt.dimmed(),
        view.lang.native_name().bold(),
        view.sidebar.ward_prompt.dimmed(),
        ward_label(view).bold(),
        view.sidebar.indicator_prompt.dimmed(),
        view.selection.indicator_label.as_deref().unwrap_or("-").bold()
    )?;

    for (idx, section) in sections.iter().enumerate() {
        let marker = if idx == selected {
            "➤".green()
        } else {
            "  ".normal()
        };
        write!(
            stdout,
            "{} {} {}\r\n",
            marker,
            section.title.bold(),
            section.summary.dimmed()
        )?;
        if expanded.get(idx).copied().unwrap_or(false) {
            for detail in &section.details {
                write!(stdout, "    {}\r\n", detail)?;
            }
        }
        write!(stdout, "\r\n")?;
    }

    write!(
        stdout,
        "{}\r\n",
        i18n::t(view.lang, keys::TUI_CONTROLS)?.dimmed()
    )?;
    stdout.flush()?;
    Ok(())
}

fn ward_label(view: &DashboardView) -> String {
    match &view.selection.ward {
        WardSelection::Ward(name) => name.clone(),
        WardSelection::All => view
            .sidebar
            .ward_options
            .first()
            .map(|option| option.label.clone())
            .unwrap_or_default(),
    }
}

fn build_sections(view: &DashboardView, formatter: &ViewFormatter) -> Vec<Section> {
    let mut sections = Vec::new();

    if !view.notices.is_empty() {
        let errors = view
            .notices
            .iter()
            .filter(|notice| notice.level == NoticeLevel::Error)
            .count();
        sections.push(Section {
            title: "!".to_string(),
            summary: format!("{} / {}", errors, view.notices.len()),
            details: view.notices.iter().map(|n| n.message.clone()).collect(),
        });
    }

    if !view.metrics.is_empty() {
        sections.push(Section {
            title: view.metrics_header.clone(),
            summary: view
                .metrics
                .first()
                .map(|metric| metric.value.clone())
                .unwrap_or_default(),
            details: formatter.metric_lines(view),
        });
    }

    if let Some(detail) = &view.detail {
        sections.push(Section {
            title: detail.header.clone(),
            summary: detail.formatted.clone(),
            details: vec![format!("{}: {}", detail.indicator_label, detail.formatted)],
        });
    }

    if let Some(raw) = &view.raw_data {
        sections.push(Section {
            title: raw.title.clone(),
            summary: raw.records.len().to_string(),
            details: formatter.raw_data_lines(view),
        });
    }

    for chart in &view.charts {
        sections.push(Section {
            title: chart.title.clone(),
            summary: chart.data.len().to_string(),
            details: formatter.chart_lines(chart),
        });
    }

    sections
}

struct Section {
    title: String,
    summary: String,
    details: Vec<String>,
}
