use serde::{Deserialize, Serialize};

use crate::catalog::MetricId;

/// One observation: a single metric's score for an employee in a given week.
///
/// A spreadsheet row carrying several metric scores expands into one record
/// per metric, all sharing the same base fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub week: u32,
    pub date: String,
    pub employee: String,
    pub goal: String,
    pub behavior: String,
    pub feedback: String,
    pub opinion: String,
    pub metrics: [MetricId; 1],
    pub score: i64,
}

/// Fields shared by every record expanded from the same spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseFields {
    pub week: u32,
    pub date: String,
    pub employee: String,
    pub goal: String,
    pub behavior: String,
    pub feedback: String,
    pub opinion: String,
}

impl ScoreRecord {
    pub fn from_base(base: &BaseFields, metric: MetricId, score: i64) -> Self {
        ScoreRecord {
            week: base.week,
            date: base.date.clone(),
            employee: base.employee.clone(),
            goal: base.goal.clone(),
            behavior: base.behavior.clone(),
            feedback: base.feedback.clone(),
            opinion: base.opinion.clone(),
            metrics: [metric],
            score,
        }
    }

    /// The record's sole metric.
    pub fn metric(&self) -> MetricId {
        self.metrics[0]
    }
}
