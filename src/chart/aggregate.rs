use crate::catalog::{METRIC_COUNT, METRICS};
use crate::chart::domain::domain_for;
use crate::chart::types::{ChartData, ChartPoint, Domain, THRESHOLD};
use crate::records::ScoreRecord;

/// Folds an already-filtered record set into radar chart series.
///
/// Cumulative scores sum every record per metric; baseline scores sum only
/// week-0 records. Sums saturate at the `i64` bounds. An empty input yields
/// zero series and the fallback domain.
pub fn aggregate_chart(records: &[ScoreRecord]) -> ChartData {
    let mut baseline = [0i64; METRIC_COUNT];
    let mut cumulative = [0i64; METRIC_COUNT];
    let mut latest_week = 0u32;

    for record in records {
        latest_week = latest_week.max(record.week);
        for metric in &record.metrics {
            let slot = metric.slot();
            cumulative[slot] = cumulative[slot].saturating_add(record.score);
            if record.week == 0 {
                baseline[slot] = baseline[slot].saturating_add(record.score);
            }
        }
    }

    let domain = if records.is_empty() {
        Domain::FALLBACK
    } else {
        domain_for(&baseline, &cumulative)
    };

    let points = METRICS
        .iter()
        .map(|m| ChartPoint {
            metric: m.id,
            label: m.short_label(),
            baseline: baseline[m.id.slot()],
            cumulative: cumulative[m.id.slot()],
            threshold: THRESHOLD,
        })
        .collect();

    ChartData {
        points,
        domain,
        latest_week,
    }
}
