//! Error types for the import pipeline.

use thiserror::Error;

/// Hard failures of an import attempt.
///
/// Row- and cell-level problems never show up here: they are absorbed by the
/// parser and only logged.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No spreadsheet identifier could be located in the supplied URL.
    #[error("Invalid Google Sheet URL. Please provide a valid URL.")]
    InvalidSource { url: String },

    /// A required header column is missing.
    #[error("CSV is missing required header: \"{missing}\". Found headers: {}", .found.join(", "))]
    SchemaViolation { missing: String, found: Vec<String> },

    /// The header carries none of the catalog's metric columns.
    #[error(
        "No metric columns found in the CSV header. \
         Expected headers like '압도적 오너십', '유연한 생존력', etc. Found headers: {}",
        .found.join(", ")
    )]
    NoMetricColumns { found: Vec<String> },

    /// The export endpoint answered with a non-success status.
    #[error("Failed to fetch data (status: {status}). Make sure the Google Sheet is public.")]
    Fetch { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid export URL: {0}")]
    Url(String),

    #[error("Failed to read local file: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    /// True for header problems, which abort the batch without a partial result.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            ImportError::SchemaViolation { .. } | ImportError::NoMetricColumns { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
