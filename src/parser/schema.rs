//! Header validation.
//!
//! The header row is checked once, up front, and turned into a
//! [`ResolvedColumns`] index that every data row is read through.

use crate::catalog::MetricId;
use crate::error::{ImportError, Result};

pub const WEEK: &str = "주차";
pub const START_DATE: &str = "시작일";
pub const EMPLOYEE: &str = "담당자";
pub const GOAL: &str = "목표";
pub const BEHAVIOR: &str = "관찰된 행동/성과";
pub const FEEDBACK: &str = "코칭 및 피드백";
pub const OPINION: &str = "팀원 의견";

/// Required header names, in the order they are checked.
pub const REQUIRED_HEADERS: [&str; 7] = [
    WEEK, START_DATE, EMPLOYEE, GOAL, BEHAVIOR, FEEDBACK, OPINION,
];

/// Column positions of a validated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub week: usize,
    pub date: usize,
    pub employee: usize,
    pub goal: usize,
    pub behavior: usize,
    pub feedback: usize,
    pub opinion: usize,
    /// Every metric column, in header order.
    pub metrics: Vec<(usize, MetricId)>,
    /// Number of cells in the header row; shorter data rows are dropped.
    pub width: usize,
}

impl ResolvedColumns {
    /// Validates a tokenized header row.
    ///
    /// # Errors
    ///
    /// [`ImportError::SchemaViolation`] for the first missing required
    /// column, [`ImportError::NoMetricColumns`] when no cell names a metric.
    pub fn resolve(header: &[String]) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ImportError::SchemaViolation {
                    missing: name.to_string(),
                    found: header.to_vec(),
                })
        };

        let week = find(WEEK)?;
        let date = find(START_DATE)?;
        let employee = find(EMPLOYEE)?;
        let goal = find(GOAL)?;
        let behavior = find(BEHAVIOR)?;
        let feedback = find(FEEDBACK)?;
        let opinion = find(OPINION)?;

        let metrics: Vec<_> = header
            .iter()
            .enumerate()
            .filter_map(|(i, h)| MetricId::from_header(h).map(|id| (i, id)))
            .collect();

        if metrics.is_empty() {
            return Err(ImportError::NoMetricColumns {
                found: header.to_vec(),
            });
        }

        Ok(ResolvedColumns {
            week,
            date,
            employee,
            goal,
            behavior,
            feedback,
            opinion,
            metrics,
            width: header.len(),
        })
    }
}
