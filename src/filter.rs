//! Employee and metric selection over an imported record set.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::catalog::MetricId;
use crate::records::ScoreRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EmployeeFilter {
    #[default]
    All,
    Only(String),
}

impl FromStr for EmployeeFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => EmployeeFilter::All,
            name => EmployeeFilter::Only(name.to_string()),
        })
    }
}

/// Current filter state. `metric: None` selects every metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub employee: EmployeeFilter,
    pub metric: Option<MetricId>,
}

impl Selection {
    pub fn matches(&self, record: &ScoreRecord) -> bool {
        let employee_match = match &self.employee {
            EmployeeFilter::All => true,
            EmployeeFilter::Only(name) => record.employee == *name,
        };
        let metric_match = self
            .metric
            .is_none_or(|metric| record.metrics.contains(&metric));

        employee_match && metric_match
    }

    pub fn apply(&self, records: &[ScoreRecord]) -> Vec<ScoreRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Distinct employee names, sorted.
pub fn employees(records: &[ScoreRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.employee.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
