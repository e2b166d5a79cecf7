//! Cost record aggregation
//!
//! Groups raw cost records by platform and resource type and computes
//! per-platform totals and percentage shares. Grouping keys are ordered,
//! so iteration order is deterministic for identical input multisets.

use std::collections::BTreeMap;

use crate::models::{ChartPoint, CostRecord, Platform, PlatformTypeAggregate};

/// Group cost records on the ordered (platform, resource type) pair
///
/// Each group carries the summed cost and the number of contributing
/// records. Input order is irrelevant; the returned map iterates in key
/// order, so repeated calls over the same multiset yield identical output.
pub fn by_platform_and_type(
    records: &[CostRecord],
) -> BTreeMap<(Platform, String), PlatformTypeAggregate> {
    let mut groups: BTreeMap<(Platform, String), PlatformTypeAggregate> = BTreeMap::new();

    for record in records {
        let key = (record.platform, record.resource_type.clone());
        groups
            .entry(key)
            .and_modify(|group| {
                group.cost += record.cost;
                group.count += 1;
            })
            .or_insert_with(|| PlatformTypeAggregate {
                platform: record.platform,
                resource_type: record.resource_type.clone(),
                cost: record.cost,
                count: 1,
            });
    }

    groups
}

/// Sum record costs per platform
///
/// Both platforms are always present in the result; a platform with no
/// records yields 0, not an absent key.
pub fn totals_by_platform(records: &[CostRecord]) -> BTreeMap<Platform, f64> {
    let mut totals = BTreeMap::from([(Platform::Aws, 0.0), (Platform::Azure, 0.0)]);

    for record in records {
        if let Some(total) = totals.get_mut(&record.platform) {
            *total += record.cost;
        }
    }

    totals
}

/// Percentage share of `value` within `total`
///
/// A zero total yields 0 rather than dividing by zero; an empty breakdown
/// is a defined case, not a fault.
pub fn percentage_of_total(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

/// Per-record (name, value, platform) series for chart rendering
pub fn chart_points(records: &[CostRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|record| ChartPoint {
            name: record.resource_name.clone(),
            value: record.cost,
            platform: record.platform,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn record(id: &str, platform: Platform, resource_type: &str, cost: f64) -> CostRecord {
        CostRecord {
            id: id.to_string(),
            platform,
            resource_type: resource_type.to_string(),
            resource_name: format!("{}-prod", resource_type),
            cost,
            currency: "USD".to_string(),
            period: crate::models::CostPeriod {
                start: Utc::now(),
                end: Utc::now(),
            },
            tags: HashMap::new(),
        }
    }

    fn sample_records() -> Vec<CostRecord> {
        vec![
            record("aws-1", Platform::Aws, "EC2", 100.0),
            record("aws-2", Platform::Aws, "S3", 200.0),
            record("azure-1", Platform::Azure, "VM", 150.0),
        ]
    }

    #[test]
    fn test_totals_by_platform() {
        let totals = totals_by_platform(&sample_records());
        assert_eq!(totals[&Platform::Aws], 300.0);
        assert_eq!(totals[&Platform::Azure], 150.0);
    }

    #[test]
    fn test_totals_include_platform_with_no_records() {
        let totals = totals_by_platform(&[record("aws-1", Platform::Aws, "EC2", 50.0)]);
        assert_eq!(totals[&Platform::Azure], 0.0);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_grouping_sums_cost_and_counts() {
        let records = vec![
            record("aws-1", Platform::Aws, "EC2", 100.0),
            record("aws-2", Platform::Aws, "EC2", 40.0),
            record("azure-1", Platform::Azure, "VM", 150.0),
        ];

        let groups = by_platform_and_type(&records);
        assert_eq!(groups.len(), 2);

        let ec2 = &groups[&(Platform::Aws, "EC2".to_string())];
        assert_eq!(ec2.cost, 140.0);
        assert_eq!(ec2.count, 2);

        let vm = &groups[&(Platform::Azure, "VM".to_string())];
        assert_eq!(vm.cost, 150.0);
        assert_eq!(vm.count, 1);
    }

    #[test]
    fn test_grouping_is_loss_free() {
        let records = sample_records();
        let grouped_total: f64 = by_platform_and_type(&records)
            .values()
            .map(|group| group.cost)
            .sum();
        let direct_total: f64 = records.iter().map(|r| r.cost).sum();
        assert_eq!(grouped_total, direct_total);
    }

    #[test]
    fn test_grouping_is_deterministic_and_order_insensitive() {
        let records = sample_records();
        let mut reversed = records.clone();
        reversed.reverse();

        let first = by_platform_and_type(&records);
        let second = by_platform_and_type(&records);
        let shuffled = by_platform_and_type(&reversed);

        let keys: Vec<_> = first.keys().cloned().collect();
        assert_eq!(keys, second.keys().cloned().collect::<Vec<_>>());
        assert_eq!(keys, shuffled.keys().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn test_percentage_of_total() {
        let pct = percentage_of_total(300.0, 450.0);
        assert_eq!((pct * 10.0).round() / 10.0, 66.7);
    }

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        assert_eq!(percentage_of_total(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_chart_points_carry_semantic_values() {
        let points = chart_points(&sample_records());
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name, "EC2-prod");
        assert_eq!(points[0].value, 100.0);
        assert_eq!(points[2].platform, Platform::Azure);
    }
}
