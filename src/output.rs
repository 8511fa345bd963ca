//! Output formatting and persistence for records and chart data.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::chart::ChartData;
use crate::records::ScoreRecord;
use csv::WriterBuilder;
use std::fs::File;

/// One exported CSV row: a record with its single metric flattened.
#[derive(Serialize)]
struct RecordRow<'a> {
    week: u32,
    date: &'a str,
    employee: &'a str,
    metric: &'a str,
    score: i64,
    goal: &'a str,
    behavior: &'a str,
    feedback: &'a str,
    opinion: &'a str,
}

impl<'a> From<&'a ScoreRecord> for RecordRow<'a> {
    fn from(r: &'a ScoreRecord) -> Self {
        RecordRow {
            week: r.week,
            date: &r.date,
            employee: &r.employee,
            metric: r.metric().code(),
            score: r.score,
            goal: &r.goal,
            behavior: &r.behavior,
            feedback: &r.feedback,
            opinion: &r.opinion,
        }
    }
}

/// Logs records using Rust's debug pretty-print format.
pub fn print_pretty(records: &[ScoreRecord]) {
    for record in records {
        debug!("{:#?}", record);
    }
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Logs one line per chart axis plus the domain.
pub fn print_chart(title: &str, chart: &ChartData) {
    info!(title, latest_week = chart.latest_week, "Chart");
    for point in &chart.points {
        info!(
            metric = %point.metric,
            label = point.label,
            baseline = point.baseline,
            cumulative = point.cumulative,
            threshold = point.threshold,
            "Axis"
        );
    }
    let [threshold, baseline, cumulative] = chart.series_captions();
    info!(%threshold, %baseline, %cumulative, "Series");
    info!(min = chart.domain.min, max = chart.domain.max, "Domain");
}

/// Writes records to a CSV file, one row per record, replacing any
/// existing file.
pub fn write_records(path: &str, records: &[ScoreRecord]) -> Result<()> {
    debug!(path, rows = records.len(), "Writing CSV export");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for record in records {
        writer.serialize(RecordRow::from(record))?;
    }
    writer.flush()?;

    Ok(())
}
