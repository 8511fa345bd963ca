//! CLI entry point for the growth log radar.
//!
//! Imports a weekly growth log from a public Google Sheet (or a saved CSV
//! export), filters it, and prints the records and radar chart series.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use growth_radar::catalog::{METRICS, MetricId};
use growth_radar::config::Settings;
use growth_radar::dashboard::{Dashboard, ImportStatus};
use growth_radar::fetch::BasicClient;
use growth_radar::filter::EmployeeFilter;
use growth_radar::import::import_from;
use growth_radar::output::{print_chart, print_json, print_pretty, write_records};
use growth_radar::source::parse_sheet_url;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "growth_radar")]
#[command(about = "Summarise weekly team growth logs from a Google Sheet", long_about = None)]
struct Cli {
    /// JSON settings file; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the spreadsheet id and tab id found in a URL
    Locate {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Import a sheet or CSV file and print records and chart data
    Import {
        /// Google Sheet URL or path to a CSV export
        #[arg(value_name = "URL_OR_FILE")]
        source: String,

        /// Only include this employee ("all" for everyone)
        #[arg(short, long, default_value = "all")]
        employee: EmployeeFilter,

        /// Only include this metric, by code (①..⑥)
        #[arg(short, long)]
        metric: Option<String>,

        /// Print records and chart as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Write the filtered records to this CSV file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the metric catalog
    Metrics,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::from_env()?,
    };

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&settings.log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&settings.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("growth_radar.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    match cli.command {
        Commands::Locate { url } => {
            let location = parse_sheet_url(&url);
            print_json(&location)?;
        }
        Commands::Import {
            source,
            employee,
            metric,
            json,
            output,
        } => {
            let metric = metric
                .map(|code| {
                    MetricId::from_code(&code)
                        .ok_or_else(|| anyhow!("unknown metric code '{code}'"))
                })
                .transpose()?;

            let client = BasicClient::from_settings(&settings)?;
            let mut dashboard = Dashboard::new();

            match dashboard.apply_import(import_from(&client, &settings, &source).await) {
                ImportStatus::Loaded {
                    records,
                    skipped_rows,
                } => {
                    info!(records, skipped_rows, "Import complete");
                }
                ImportStatus::NoData | ImportStatus::Failed(_) => {
                    let message = dashboard.import_error().unwrap_or_default().to_string();
                    return Err(anyhow!(message));
                }
            }

            info!(employees = ?dashboard.employees(), "Employees");
            dashboard.set_employee(employee);
            dashboard.set_metric(metric);

            let filtered = dashboard.filtered();
            let chart = dashboard.chart();
            if filtered.is_empty() {
                warn!("No records match the current selection");
            }

            if json {
                print_json(&filtered)?;
                print_json(&chart)?;
            } else {
                print_pretty(&filtered);
                print_chart(&dashboard.title(), &chart);
            }

            if let Some(path) = output {
                write_records(&path, &filtered)?;
                info!(path = %path, rows = filtered.len(), "Records written");
            }
        }
        Commands::Metrics => {
            for metric in &METRICS {
                info!(
                    code = metric.code,
                    label = metric.label,
                    header = metric.header,
                    "Metric"
                );
            }
        }
    }

    Ok(())
}
