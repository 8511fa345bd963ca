//! Radar chart derivation.
//!
//! Folds a filtered set of score records into per-metric baseline and
//! cumulative totals, an axis domain, and the captions the renderer shows.

pub mod aggregate;
pub mod domain;
pub mod title;
pub mod types;

pub use aggregate::aggregate_chart;
pub use title::chart_title;
pub use types::{ChartData, ChartPoint, Domain};
