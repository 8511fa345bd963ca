//! The fixed catalog of competency metrics tracked by the dashboard.
//!
//! The six entries never change at runtime. Lookup maps are built once on
//! first use and shared read-only afterwards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of one of the six competency metrics.
///
/// Serialized as its ordinal code (`"①"` .. `"⑥"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricId {
    #[serde(rename = "①")]
    Ownership,
    #[serde(rename = "②")]
    Resilience,
    #[serde(rename = "③")]
    Relationship,
    #[serde(rename = "④")]
    Improvement,
    #[serde(rename = "⑤")]
    Learning,
    #[serde(rename = "⑥")]
    DataLiteracy,
}

/// Static catalog entry for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub id: MetricId,
    /// Ordinal code, e.g. `"①"`.
    pub code: &'static str,
    /// Display label, e.g. `"① 오너십"`.
    pub label: &'static str,
    /// Spreadsheet header name used to locate the metric's column.
    pub header: &'static str,
}

impl Metric {
    /// Label without the ordinal prefix, as shown on chart axes.
    pub fn short_label(&self) -> &'static str {
        self.label.split(' ').nth(1).unwrap_or(self.label)
    }
}

pub const METRIC_COUNT: usize = 6;

pub static METRICS: [Metric; METRIC_COUNT] = [
    Metric {
        id: MetricId::Ownership,
        code: "①",
        label: "① 오너십",
        header: "압도적 오너십",
    },
    Metric {
        id: MetricId::Resilience,
        code: "②",
        label: "② 생존력",
        header: "유연한 생존력",
    },
    Metric {
        id: MetricId::Relationship,
        code: "③",
        label: "③ 관계 형성",
        header: "관계 형성 능력",
    },
    Metric {
        id: MetricId::Improvement,
        code: "④",
        label: "④ 개선력",
        header: "주도적 개선력",
    },
    Metric {
        id: MetricId::Learning,
        code: "⑤",
        label: "⑤ 학습 실행",
        header: "학습 실행력",
    },
    Metric {
        id: MetricId::DataLiteracy,
        code: "⑥",
        label: "⑥ 데이터 활용",
        header: "데이터 활용 능력",
    },
];

static BY_HEADER: Lazy<HashMap<&'static str, MetricId>> =
    Lazy::new(|| METRICS.iter().map(|m| (m.header, m.id)).collect());

static BY_CODE: Lazy<HashMap<&'static str, MetricId>> =
    Lazy::new(|| METRICS.iter().map(|m| (m.code, m.id)).collect());

impl MetricId {
    pub const ALL: [MetricId; METRIC_COUNT] = [
        MetricId::Ownership,
        MetricId::Resilience,
        MetricId::Relationship,
        MetricId::Improvement,
        MetricId::Learning,
        MetricId::DataLiteracy,
    ];

    /// Chart slot of this metric (0..6), in catalog order.
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn metric(self) -> &'static Metric {
        &METRICS[self.slot()]
    }

    pub fn code(self) -> &'static str {
        self.metric().code
    }

    /// Resolves a spreadsheet header cell to a metric, by exact match.
    pub fn from_header(header: &str) -> Option<Self> {
        BY_HEADER.get(header).copied()
    }

    /// Resolves an ordinal code such as `"③"`.
    pub fn from_code(code: &str) -> Option<Self> {
        BY_CODE.get(code).copied()
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_catalog_order() {
        for (i, metric) in METRICS.iter().enumerate() {
            assert_eq!(metric.id.slot(), i);
            assert_eq!(MetricId::ALL[i], metric.id);
        }
    }

    #[test]
    fn test_from_header_exact_match_only() {
        assert_eq!(
            MetricId::from_header("압도적 오너십"),
            Some(MetricId::Ownership)
        );
        assert_eq!(
            MetricId::from_header("데이터 활용 능력"),
            Some(MetricId::DataLiteracy)
        );
        assert_eq!(MetricId::from_header(" 압도적 오너십"), None);
        assert_eq!(MetricId::from_header("오너십"), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(MetricId::from_code("④"), Some(MetricId::Improvement));
        assert_eq!(MetricId::from_code("7"), None);
    }

    #[test]
    fn test_short_label() {
        assert_eq!(METRICS[0].short_label(), "오너십");
        // only the first word after the ordinal, as on the chart axis
        assert_eq!(METRICS[2].short_label(), "관계");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&MetricId::Learning).unwrap();
        assert_eq!(json, "\"⑤\"");
        let back: MetricId = serde_json::from_str("\"②\"").unwrap();
        assert_eq!(back, MetricId::Resilience);
    }
}
