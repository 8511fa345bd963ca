use super::types::{Domain, THRESHOLD};

/// Radial axis bounds covering every plotted value with some headroom.
///
/// The lower bound is `floor(1.1 × min)` and the upper `ceil(1.2 × max)`,
/// where both extremes include 0 and the threshold. Equal bounds are pushed
/// apart by 2 on each side.
pub fn domain_for(baseline: &[i64], cumulative: &[i64]) -> Domain {
    let values = baseline.iter().chain(cumulative).copied();
    let lo = values.clone().fold(THRESHOLD.min(0), i64::min);
    let hi = values.fold(THRESHOLD.max(0), i64::max);

    let mut min = (lo as f64 * 1.1).floor() as i64;
    let mut max = match (hi as f64 * 1.2).ceil() as i64 {
        0 => 5,
        m => m,
    };

    if min == max {
        min = min.saturating_sub(2);
        max = max.saturating_add(2);
    }

    Domain { min, max }
}
