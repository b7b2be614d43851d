// SPDX-License-Identifier: PMPL-1.0-or-later

//! ward-health: localized ward-level urban health dashboard
//!
//! Prints the dashboard, browses it in a terminal UI, exports it as JSON or
//! YAML, and checks the translation catalog.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ward_health::config::{Config, Overrides, Settings};
use ward_health::dashboard::{build_view_from_path, Selection};
use ward_health::diagnostics;
use ward_health::i18n::{self, Lang};
use ward_health::indicators::DisplayLabelIndex;
use ward_health::lint;
use ward_health::report::{self, DashboardTui, ExportFormat};
use ward_health::session::Session;

#[derive(Parser)]
#[command(name = "ward-health")]
#[command(version)]
#[command(about = "Localized ward-level urban health dashboard")]
#[command(long_about = None)]
struct Cli {
    /// Config file (default: ward-health.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct SourceArgs {
    /// Ward CSV file
    #[arg(short, long, value_name = "CSV")]
    data: Option<PathBuf>,

    /// Display language (en, ne)
    #[arg(short, long, value_name = "CODE")]
    lang: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
struct SelectionArgs {
    /// Ward name, or the localized "All Wards" label
    #[arg(short, long)]
    ward: Option<String>,

    /// Indicator display label in the active language
    #[arg(short, long)]
    indicator: Option<String>,
}

impl From<SelectionArgs> for Selection {
    fn from(args: SelectionArgs) -> Self {
        Selection::new(args.ward, args.indicator)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard to the console
    Show {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Interactive terminal dashboard
    Tui {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Export the dashboard view as JSON or YAML
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List indicators: display label, canonical key, column
    Indicators {
        /// Display language (en, ne)
        #[arg(short, long, value_name = "CODE")]
        lang: Option<String>,
    },

    /// Check translation tables and the indicator catalog
    Lint,

    /// Run self-diagnostics
    Doctor,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn settings(cli_config: Option<&PathBuf>, overrides: Overrides) -> Result<Settings> {
    let (config, config_path) =
        Config::load(cli_config.map(PathBuf::as_path)).context("loading configuration")?;
    let settings = Settings::resolve(&config, config_path, &overrides)?;
    debug!(?settings, "settings resolved");
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Surface catalog gaps early; `lint` reports them in full.
    let catalog = lint::lint_catalog()?;
    if !matches!(cli.command, Commands::Lint) {
        catalog.log();
    }

    match cli.command {
        Commands::Show { source, selection } => {
            let settings = settings(cli.config.as_ref(), source.into_overrides(None))?;
            let mut session = Session::new(settings.lang);
            let (_, view) =
                build_view_from_path(&mut session, &settings.data_path, &selection.into())?;
            report::print_view(&view);
        }

        Commands::Tui { source } => {
            let settings = settings(cli.config.as_ref(), source.into_overrides(None))?;
            DashboardTui::new(Session::new(settings.lang), settings.data_path).run()?;
        }

        Commands::Export {
            source,
            selection,
            format,
            output,
        } => {
            let settings = settings(cli.config.as_ref(), source.into_overrides(format))?;
            let mut session = Session::new(settings.lang);
            let (dataset, view) =
                build_view_from_path(&mut session, &settings.data_path, &selection.into())?;

            match output {
                Some(path) => {
                    report::save_export(&view, &dataset, settings.export_format, &path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Export saved to: {}", path.display());
                }
                None => {
                    println!(
                        "{}",
                        report::render_export(&view, &dataset, settings.export_format)?
                    );
                }
            }
        }

        Commands::Indicators { lang } => {
            let lang = match lang {
                Some(code) => code.parse::<Lang>()?,
                None => settings(cli.config.as_ref(), Overrides::default())?.lang,
            };
            let index = DisplayLabelIndex::build(lang)?;
            println!("{}", i18n::t(lang, i18n::keys::SELECT_INDICATOR)?.bold());
            for (label, indicator) in index.options() {
                println!(
                    "  {:32} {:28} {}",
                    label,
                    indicator.canonical_key().dimmed(),
                    indicator.column()
                );
            }
        }

        Commands::Lint => {
            if catalog.findings.is_empty() {
                println!("{}", "Catalog consistent".green());
            }
            for finding in &catalog.findings {
                let line = finding.to_string();
                if finding.is_error() {
                    println!("  {}", line.red());
                } else {
                    println!("  {}", line.yellow());
                }
            }
            if !catalog.is_clean() {
                bail!("catalog lint found {} problem(s)", catalog.error_count());
            }
        }

        Commands::Doctor => {
            let settings = settings(cli.config.as_ref(), Overrides::default())?;
            diagnostics::run_self_diagnostics(&settings)?;
        }
    }

    Ok(())
}

impl SourceArgs {
    fn into_overrides(self, export_format: Option<ExportFormat>) -> Overrides {
        Overrides {
            data_path: self.data,
            language: self.lang,
            export_format,
        }
    }
}
