//! Turns a sheet's CSV export into [`ScoreRecord`]s.
//!
//! The dialect is deliberately small: one record per line, comma separated,
//! double-quote escaped. Quoted fields may not contain newlines.

pub mod row;
pub mod schema;

pub use row::parse_csv_row;
pub use schema::{REQUIRED_HEADERS, ResolvedColumns};

use tracing::{debug, error, warn};

use crate::error::Result;
use crate::records::{BaseFields, ScoreRecord};

/// Records produced by one parse, plus the rows that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<ScoreRecord>,
    /// 1-based line numbers of data rows with fewer fields than the header.
    pub skipped_rows: Vec<usize>,
}

/// Parses the full export text into records.
///
/// Input with fewer than two lines yields an empty vector. Header problems
/// are errors; short rows and unparsable scores are dropped.
pub fn parse_growth_logs(text: &str) -> Result<Vec<ScoreRecord>> {
    parse_with_report(text).map(|report| report.records)
}

/// Same as [`parse_growth_logs`] but also reports which rows were skipped.
///
/// # Errors
///
/// Returns a schema violation if a required header is missing or no metric
/// column is present. No partial result is returned in that case.
pub fn parse_with_report(text: &str) -> Result<ParseReport> {
    let text = text.trim_start_matches('\u{feff}').trim().replace("\r\n", "\n");
    let lines: Vec<&str> = text.split('\n').collect();

    if lines.len() < 2 {
        error!("CSV data has no rows or only a header row.");
        return Ok(ParseReport::default());
    }

    let header = parse_csv_row(lines[0]);
    let columns = ResolvedColumns::resolve(&header)?;
    debug!(
        columns = columns.width,
        metric_columns = columns.metrics.len(),
        "Header resolved"
    );

    let mut report = ParseReport::default();

    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }

        let line_no = i + 1;
        let values = parse_csv_row(line);
        if values.len() < columns.width {
            warn!(
                row = line_no,
                fields = values.len(),
                expected = columns.width,
                "Row has fewer columns than header. Skipping."
            );
            report.skipped_rows.push(line_no);
            continue;
        }

        let base = base_fields(&columns, &values);

        for &(index, metric) in &columns.metrics {
            if let Some(score) = parse_leading_int(&values[index]) {
                report
                    .records
                    .push(ScoreRecord::from_base(&base, metric, score));
            }
        }
    }

    debug!(
        records = report.records.len(),
        skipped = report.skipped_rows.len(),
        "CSV parsed"
    );

    Ok(report)
}

fn base_fields(columns: &ResolvedColumns, values: &[String]) -> BaseFields {
    let week = parse_leading_int(&values[columns.week])
        .and_then(|w| u32::try_from(w).ok())
        .unwrap_or(0);

    BaseFields {
        week,
        date: values[columns.date].clone(),
        employee: values[columns.employee].clone(),
        goal: values[columns.goal].clone(),
        behavior: values[columns.behavior].clone(),
        feedback: values[columns.feedback].clone(),
        opinion: values[columns.opinion].clone(),
    }
}

/// Reads the integer at the start of `s`, ignoring leading whitespace and
/// anything after the digits (`"3점"` is 3, `"2.5"` is 2).
///
/// Returns `None` when there are no digits or the value overflows.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
