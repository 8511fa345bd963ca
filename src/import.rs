//! End-to-end import: locate the sheet, download its CSV export, parse it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::fetch::{HttpClient, fetch_text};
use crate::parser::parse_with_report;
use crate::records::ScoreRecord;
use crate::source::SheetSource;

/// Shown when an import parsed cleanly but produced no records.
pub const NO_DATA_MESSAGE: &str =
    "No data found in the sheet or failed to parse. Please check the sheet format and content.";

/// Result of one import attempt that got past header validation.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    /// URL or path the text was read from.
    pub source: String,
    pub imported_at: DateTime<Utc>,
    pub records: Vec<ScoreRecord>,
    pub skipped_rows: Vec<usize>,
}

impl ImportOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses already-downloaded export text.
pub fn import_text(source: &str, text: &str) -> Result<ImportOutcome> {
    let report = parse_with_report(text)?;

    if !report.skipped_rows.is_empty() {
        warn!(
            source,
            skipped = report.skipped_rows.len(),
            "Some rows were skipped"
        );
    }
    info!(source, records = report.records.len(), "Import parsed");

    Ok(ImportOutcome {
        source: source.to_string(),
        imported_at: Utc::now(),
        records: report.records,
        skipped_rows: report.skipped_rows,
    })
}

/// Imports a public Google Sheet given any of its web URLs.
///
/// # Errors
///
/// Fails before any request if the URL has no spreadsheet identifier; also
/// propagates fetch failures and header schema violations.
#[tracing::instrument(skip(client, settings))]
pub async fn import_sheet<C: HttpClient>(
    client: &C,
    settings: &Settings,
    url: &str,
) -> Result<ImportOutcome> {
    let source = SheetSource::locate(url)?;
    let export_url = source.export_url(&settings.export_base_url);
    info!(sheet_id = %source.sheet_id, gid = ?source.gid, "Fetching sheet export");

    let text = fetch_text(client, &export_url).await?;
    import_text(&export_url, &text)
}

/// Imports a CSV export saved on disk.
#[tracing::instrument]
pub fn import_file(path: &str) -> Result<ImportOutcome> {
    let text = std::fs::read_to_string(path)?;
    import_text(path, &text)
}

/// Imports from an `http://` or `https://` sheet URL, or else a local file
/// path.
pub async fn import_from<C: HttpClient>(
    client: &C,
    settings: &Settings,
    source: &str,
) -> Result<ImportOutcome> {
    if is_web_url(source) {
        import_sheet(client, settings, source).await
    } else {
        import_file(source)
    }
}

fn is_web_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::fetch::BasicClient;
    use std::io::Write;

    const SAMPLE: &str = "주차,시작일,담당자,목표,관찰된 행동/성과,코칭 및 피드백,팀원 의견,학습 실행력\n\
                          0,2024-01-01,kim,g,b,f,o,1\n\
                          1,2024-01-08,kim,g\n\
                          1,2024-01-08,kim,g,b,f,o,2";

    #[test]
    fn test_import_text_reports_skipped_rows() {
        let outcome = import_text("memory", SAMPLE).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_rows, vec![3]);
        assert_eq!(outcome.source, "memory");
        assert!(!outcome.is_empty());
    }

    #[test]
    fn test_import_text_header_only_is_empty() {
        let outcome = import_text("memory", "주차,시작일").unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_import_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let outcome = import_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let err = import_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ImportError::Io(_)));
    }

    #[test]
    fn test_only_http_schemes_are_web_urls() {
        assert!(is_web_url("https://docs.google.com/spreadsheets/d/x/edit"));
        assert!(is_web_url("http://docs.google.com/spreadsheets/d/x/edit"));
        assert!(!is_web_url("http_export.csv"));
        assert!(!is_web_url("https_backup/log.csv"));
        assert!(!is_web_url("httpdocs/log.csv"));
    }

    #[tokio::test]
    async fn test_relative_path_named_like_http_is_read_locally() {
        let client = BasicClient::new();
        let err = import_from(&client, &Settings::default(), "http_missing_export.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Io(_)));
    }

    #[tokio::test]
    async fn test_invalid_sheet_url_aborts_before_fetch() {
        let client = BasicClient::new();
        let err = import_from(&client, &Settings::default(), "https://example.com/nothing")
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidSource { .. }));
    }
}
