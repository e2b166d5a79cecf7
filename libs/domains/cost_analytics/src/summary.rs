//! Cost summary assembly
//!
//! Combines platform totals with the top cost drivers and an externally
//! supplied trend percentage into the headline [`CostSummary`] view-model.

use crate::aggregate;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{CostRecord, CostSummary, Platform, PlatformCosts};

/// Number of highest-cost records surfaced as cost drivers
const TOP_COST_DRIVERS: usize = 5;

/// Build the headline cost summary for one snapshot
///
/// `trend_percent` is the signed month-over-month percentage supplied by
/// the trend collaborator (see [`crate::trend::period_over_period`]); this
/// function copies it through rather than recomputing it. Top cost drivers
/// are the 5 highest-cost records in descending order, with ties broken by
/// input order.
///
/// An empty snapshot has no defined totals, so it is rejected instead of
/// being reported as a zero-valued summary; callers wanting a "no data"
/// view render it outside this core.
pub fn build_summary(records: &[CostRecord], trend_percent: f64) -> AnalyticsResult<CostSummary> {
    if records.is_empty() {
        return Err(AnalyticsError::InsufficientData(
            "cost summary requires at least one cost record".to_string(),
        ));
    }

    let totals = aggregate::totals_by_platform(records);
    let platform_breakdown = PlatformCosts::new(
        totals.get(&Platform::Aws).copied().unwrap_or(0.0),
        totals.get(&Platform::Azure).copied().unwrap_or(0.0),
    );

    // Stable sort: equal costs keep their input order, first-seen wins
    let mut ranked: Vec<&CostRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    let top_cost_drivers: Vec<CostRecord> = ranked
        .into_iter()
        .take(TOP_COST_DRIVERS)
        .cloned()
        .collect();

    tracing::debug!(
        total_cost = platform_breakdown.total,
        record_count = records.len(),
        "built cost summary"
    );

    Ok(CostSummary {
        total_cost: platform_breakdown.total,
        monthly_trend: trend_percent,
        top_cost_drivers,
        platform_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn record(id: &str, platform: Platform, cost: f64) -> CostRecord {
        CostRecord {
            id: id.to_string(),
            platform,
            resource_type: "EC2".to_string(),
            resource_name: format!("{}-prod", id),
            cost,
            currency: "USD".to_string(),
            period: crate::models::CostPeriod {
                start: Utc::now(),
                end: Utc::now(),
            },
            tags: HashMap::new(),
        }
    }

    #[test]
    fn test_empty_snapshot_is_rejected() {
        let result = build_summary(&[], 2.5);
        assert!(matches!(result, Err(AnalyticsError::InsufficientData(_))));
    }

    #[test]
    fn test_breakdown_and_total() {
        let records = vec![
            record("aws-1", Platform::Aws, 100.0),
            record("aws-2", Platform::Aws, 200.0),
            record("azure-1", Platform::Azure, 150.0),
        ];

        let summary = build_summary(&records, -3.1).unwrap();
        assert_eq!(summary.platform_breakdown.aws, 300.0);
        assert_eq!(summary.platform_breakdown.azure, 150.0);
        assert_eq!(summary.platform_breakdown.total, 450.0);
        assert_eq!(summary.total_cost, 450.0);
        assert_eq!(summary.monthly_trend, -3.1);
    }

    #[test]
    fn test_total_matches_platform_totals_sum() {
        let records = vec![
            record("aws-1", Platform::Aws, 42.0),
            record("azure-1", Platform::Azure, 58.0),
            record("azure-2", Platform::Azure, 17.5),
        ];

        let platform_sum: f64 = aggregate::totals_by_platform(&records).values().sum();
        let summary = build_summary(&records, 0.0).unwrap();
        assert_eq!(summary.total_cost, platform_sum);
    }

    #[test]
    fn test_single_platform_snapshot_keeps_other_at_zero() {
        let records = vec![record("aws-1", Platform::Aws, 99.0)];
        let summary = build_summary(&records, 1.0).unwrap();
        assert_eq!(summary.platform_breakdown.azure, 0.0);
        assert_eq!(summary.total_cost, 99.0);
    }

    #[test]
    fn test_top_cost_drivers_descending_capped_at_five() {
        let records: Vec<CostRecord> = (1..=7)
            .map(|i| record(&format!("aws-{}", i), Platform::Aws, (i * 100) as f64))
            .collect();

        let summary = build_summary(&records, 0.0).unwrap();
        let costs: Vec<f64> = summary.top_cost_drivers.iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![700.0, 600.0, 500.0, 400.0, 300.0]);
    }

    #[test]
    fn test_top_cost_drivers_ties_keep_input_order() {
        let records = vec![
            record("aws-1", Platform::Aws, 100.0),
            record("aws-2", Platform::Aws, 100.0),
            record("azure-1", Platform::Azure, 100.0),
        ];

        let summary = build_summary(&records, 0.0).unwrap();
        let ids: Vec<&str> = summary
            .top_cost_drivers
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["aws-1", "aws-2", "azure-1"]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let records = vec![
            record("aws-1", Platform::Aws, 10.0),
            record("aws-2", Platform::Aws, 20.0),
        ];
        let before = records.clone();
        build_summary(&records, 0.0).unwrap();
        assert_eq!(records, before);
    }
}
