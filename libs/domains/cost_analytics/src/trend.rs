//! Trend statistics over daily spend
//!
//! Reduces a time-ordered window of daily totals into average/min/max and
//! a projected monthly figure, and derives the signed period-over-period
//! trend percentage fed into the cost summary.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{TrendPoint, TrendSummary};

/// Days used to project the daily average into a monthly figure
const PROJECTION_DAYS: f64 = 30.0;

/// Summarize a window of daily trend points
///
/// Points are expected to be contiguous calendar days but no date
/// validation is performed; that is the data source's responsibility.
/// An empty window has no defined average, so it is rejected rather than
/// silently reported as zero.
pub fn summarize(points: &[TrendPoint]) -> AnalyticsResult<TrendSummary> {
    if points.is_empty() {
        return Err(AnalyticsError::EmptyInput(
            "trend summary requires at least one data point".to_string(),
        ));
    }

    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for point in points {
        let total = point.total();
        sum += total;
        max = max.max(total);
        min = min.min(total);
    }

    let average = sum / points.len() as f64;

    Ok(TrendSummary {
        average,
        max,
        min,
        projected_monthly: average * PROJECTION_DAYS,
    })
}

/// Signed percent change between the earlier and later halves of a window
///
/// The window is split in the middle; each half is compared by its average
/// daily total, so an odd-length window needs no special casing. A zero
/// earlier-half spend yields 0, matching the zero-total convention of
/// [`crate::aggregate::percentage_of_total`].
pub fn period_over_period(points: &[TrendPoint]) -> AnalyticsResult<f64> {
    if points.len() < 2 {
        return Err(AnalyticsError::EmptyInput(
            "period-over-period comparison requires at least two data points".to_string(),
        ));
    }

    let mid = points.len() / 2;
    let earlier_avg =
        points[..mid].iter().map(TrendPoint::total).sum::<f64>() / mid as f64;
    let later_avg = points[mid..].iter().map(TrendPoint::total).sum::<f64>()
        / (points.len() - mid) as f64;

    if earlier_avg == 0.0 {
        return Ok(0.0);
    }

    let percent = (later_avg - earlier_avg) / earlier_avg * 100.0;
    tracing::debug!(earlier_avg, later_avg, percent, "computed period-over-period trend");

    Ok(percent)
}
