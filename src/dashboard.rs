//! Caller-side state for the dashboard view.
//!
//! Holds the current record set and filter selection. A successful import
//! with data wholly replaces the record set; anything else leaves it as is.

use tracing::{error, info};

use crate::catalog::MetricId;
use crate::chart::{ChartData, aggregate_chart, chart_title};
use crate::error::Result;
use crate::filter::{EmployeeFilter, Selection, employees};
use crate::import::{ImportOutcome, NO_DATA_MESSAGE};
use crate::records::ScoreRecord;

/// What happened to the record set after an import attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    Loaded { records: usize, skipped_rows: usize },
    NoData,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Dashboard {
    records: Vec<ScoreRecord>,
    selection: Selection,
    import_error: Option<String>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_import(&mut self, result: Result<ImportOutcome>) -> ImportStatus {
        match result {
            Ok(outcome) if outcome.is_empty() => {
                self.import_error = Some(NO_DATA_MESSAGE.to_string());
                ImportStatus::NoData
            }
            Ok(outcome) => {
                let status = ImportStatus::Loaded {
                    records: outcome.records.len(),
                    skipped_rows: outcome.skipped_rows.len(),
                };
                info!(
                    source = %outcome.source,
                    records = outcome.records.len(),
                    "Record set replaced"
                );
                self.records = outcome.records;
                self.import_error = None;
                status
            }
            Err(e) => {
                error!(error = %e, "Import failed");
                let message = e.to_string();
                self.import_error = Some(message.clone());
                ImportStatus::Failed(message)
            }
        }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Message from the last import attempt, if it did not load data.
    pub fn import_error(&self) -> Option<&str> {
        self.import_error.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_employee(&mut self, employee: EmployeeFilter) {
        self.selection.employee = employee;
    }

    pub fn set_metric(&mut self, metric: Option<MetricId>) {
        self.selection.metric = metric;
    }

    pub fn employees(&self) -> Vec<String> {
        employees(&self.records)
    }

    pub fn filtered(&self) -> Vec<ScoreRecord> {
        self.selection.apply(&self.records)
    }

    pub fn chart(&self) -> ChartData {
        aggregate_chart(&self.filtered())
    }

    pub fn title(&self) -> String {
        chart_title(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::import::import_text;

    const SAMPLE: &str = "주차,시작일,담당자,목표,관찰된 행동/성과,코칭 및 피드백,팀원 의견,압도적 오너십,유연한 생존력\n\
                          0,2024-01-01,kim,g,b,f,o,1,0\n\
                          2,2024-01-15,kim,g,b,f,o,3,1\n\
                          1,2024-01-08,lee,g,b,f,o,2,";

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.apply_import(import_text("memory", SAMPLE));
        dashboard
    }

    #[test]
    fn test_successful_import_replaces_records() {
        let mut dashboard = Dashboard::new();
        let status = dashboard.apply_import(import_text("memory", SAMPLE));

        assert_eq!(
            status,
            ImportStatus::Loaded {
                records: 5,
                skipped_rows: 0
            }
        );
        assert_eq!(dashboard.records().len(), 5);
        assert_eq!(dashboard.import_error(), None);
        assert_eq!(dashboard.employees(), vec!["kim", "lee"]);
    }

    #[test]
    fn test_failed_import_keeps_prior_data() {
        let mut dashboard = loaded();
        let status = dashboard.apply_import(Err(ImportError::InvalidSource {
            url: "x".into(),
        }));

        assert!(matches!(status, ImportStatus::Failed(_)));
        assert_eq!(dashboard.records().len(), 5);
        assert!(dashboard.import_error().is_some());
    }

    #[test]
    fn test_empty_import_keeps_prior_data() {
        let mut dashboard = loaded();
        let status = dashboard.apply_import(import_text("memory", ""));

        assert_eq!(status, ImportStatus::NoData);
        assert_eq!(dashboard.records().len(), 5);
        assert_eq!(dashboard.import_error(), Some(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_chart_follows_selection() {
        let mut dashboard = loaded();
        dashboard.set_employee(EmployeeFilter::Only("kim".into()));

        let chart = dashboard.chart();
        assert_eq!(chart.baseline()[0], 1);
        assert_eq!(chart.cumulative()[0], 4);
        assert_eq!(chart.cumulative()[1], 1);
        assert_eq!(chart.latest_week, 2);

        dashboard.set_metric(Some(MetricId::Resilience));
        let chart = dashboard.chart();
        assert_eq!(chart.cumulative()[0], 0);
        assert_eq!(chart.cumulative()[1], 1);
        assert_eq!(dashboard.title(), "담당자 kim '생존력' 관련 역량 분석");
    }
}
