//! PM Report command-line tool
//!
//! Reads one week of project data and prints the aggregated report as JSON.
//!
//! ```text
//! pmreport <dataset.json> [--config <settings.toml>]
//! ```

mod dataset;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pmreport_core::variance::describe_range;
use pmreport_core::{AggregationReport, BandSet, ReportService};
use pmreport_shared::config::LogConfig;
use pmreport_shared::{AppConfig, AppError, AppResult, WeekId};

use dataset::WeekDataset;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load_with(cli.config.as_deref())
        .map_err(AppError::from)
        .context("loading configuration")?;

    init_tracing(&config.log);

    let bands = BandSet::from_config(&config.variance.thresholds)
        .map_err(|e| AppError::Configuration(e.to_string()))
        .context("validating variance thresholds")?;
    debug!(bands = bands.len(), "Variance thresholds loaded");

    let dataset = WeekDataset::load(&cli.dataset)?;
    let week = dataset.week();
    if let Some(week) = dataset.week {
        let outside = dataset.entries_outside(week);
        if outside > 0 {
            warn!(%week, outside, "Timesheet entries dated outside the dataset week");
        }
    }
    let projects = dataset.projects();

    let report = ReportService::aggregate(&projects, &bands);
    info!(
        week = week.map(|w| w.to_string()),
        projects = report.total_projects,
        classified = report.variance.classified,
        "Report generated"
    );
    if report.variance.skipped > 0 {
        warn!(
            skipped = report.variance.skipped,
            "Projects without variance data left out of the variance figures"
        );
    }

    let output = ReportOutput::new(week, &bands, report);
    let json = output.to_json()?;
    writeln!(std::io::stdout().lock(), "{json}")
        .map_err(AppError::from)
        .context("writing report")?;

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    // RUST_LOG wins over the configured filter
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log.filter.as_str().into());

    let (plain, json) = if log.json {
        (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();
}

/// Weekly PM variance and budget report.
#[derive(Debug, Parser)]
#[command(name = "pmreport", version)]
#[command(about = "Aggregates one week of project data into a JSON report")]
struct Cli {
    /// Week dataset (JSON)
    dataset: PathBuf,
    /// Settings file layered over config/default and config/{RUN_MODE}
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Band legend entry shown next to the charts.
#[derive(Debug, Serialize)]
struct BandLegend<'a> {
    label: &'a str,
    color: &'a str,
    range: String,
}

/// Everything printed to stdout.
#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    week: Option<WeekId>,
    week_label: Option<String>,
    bands: Vec<BandLegend<'a>>,
    report: AggregationReport,
}

impl<'a> ReportOutput<'a> {
    fn new(week: Option<WeekId>, bands: &'a BandSet, report: AggregationReport) -> Self {
        let legend = bands
            .iter()
            .enumerate()
            .map(|(index, band)| BandLegend {
                label: &band.label,
                color: &band.color,
                range: describe_range(bands, index).unwrap_or_default(),
            })
            .collect();

        Self {
            week,
            week_label: week.map(|w| w.label()),
            bands: legend,
            report,
        }
    }

    fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Internal(e.to_string()))
    }
}
