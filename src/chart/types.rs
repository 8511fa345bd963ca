//! Data types handed to the radar chart renderer.

use serde::Serialize;

use crate::catalog::{METRIC_COUNT, MetricId};

/// Reference score every metric is drawn against.
pub const THRESHOLD: i64 = 2;

pub const THRESHOLD_CAPTION: &str = "신규 사업 참여 기준";
pub const BASELINE_CAPTION: &str = "0주차 베이스라인";

/// Values plotted for one metric axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub metric: MetricId,
    pub label: &'static str,
    pub baseline: i64,
    pub cumulative: i64,
    pub threshold: i64,
}

/// Radial axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub min: i64,
    pub max: i64,
}

impl Domain {
    pub const FALLBACK: Domain = Domain { min: 0, max: 5 };
}

/// Complete chart derivation for one filtered record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// One point per catalog metric, in catalog order.
    pub points: Vec<ChartPoint>,
    pub domain: Domain,
    pub latest_week: u32,
}

impl ChartData {
    pub fn labels(&self) -> Vec<&'static str> {
        self.points.iter().map(|p| p.label).collect()
    }

    pub fn baseline(&self) -> [i64; METRIC_COUNT] {
        self.series(|p| p.baseline)
    }

    pub fn cumulative(&self) -> [i64; METRIC_COUNT] {
        self.series(|p| p.cumulative)
    }

    pub fn threshold(&self) -> [i64; METRIC_COUNT] {
        self.series(|p| p.threshold)
    }

    /// Legend caption for the cumulative series.
    pub fn cumulative_caption(&self) -> String {
        if self.latest_week > 0 {
            format!("합산 점수 ({}주차까지)", self.latest_week)
        } else {
            "합산 점수 (0주차)".to_string()
        }
    }

    /// Legend captions for the threshold, baseline and cumulative series.
    pub fn series_captions(&self) -> [String; 3] {
        [
            THRESHOLD_CAPTION.to_string(),
            BASELINE_CAPTION.to_string(),
            self.cumulative_caption(),
        ]
    }

    fn series(&self, f: impl Fn(&ChartPoint) -> i64) -> [i64; METRIC_COUNT] {
        let mut out = [0; METRIC_COUNT];
        for p in &self.points {
            out[p.metric.slot()] = f(p);
        }
        out
    }
}
