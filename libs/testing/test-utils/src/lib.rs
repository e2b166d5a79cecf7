//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the analytics
//! domain:
//! - `TestDataBuilder`: Deterministic snapshot fixture generation
//! - `assertions`: Custom assertion helpers
//!
//! Fixtures are seeded from the test name, so every test sees the same
//! snapshot on every run while different tests see different data.
//!
//! # Usage
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let records = builder.cost_records();
//! let resources = builder.cloud_resources();
//! ```

use chrono::{Duration, Utc};
use std::collections::HashMap;

use domain_cost_analytics::{
    CloudResource, CostPeriod, CostRecord, EffortLevel, OptimizationRecommendation, Platform,
    RecommendationType, ResourceStatus, TrendPoint,
};

const AWS_SERVICES: [&str; 8] = [
    "EC2", "S3", "RDS", "Lambda", "CloudFront", "ELB", "VPC", "Route53",
];

const AZURE_SERVICES: [&str; 8] = [
    "Virtual Machines",
    "Storage Account",
    "SQL Database",
    "App Service",
    "CDN",
    "Load Balancer",
    "Virtual Network",
    "DNS Zone",
];

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic value in `[min, max)` derived from the seed and an index
    pub fn value_in(&self, index: u64, min: u64, max: u64) -> f64 {
        (min + self.mix(index) % (max - min)) as f64
    }

    fn mix(&self, index: u64) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        (self.seed, index).hash(&mut hasher);
        hasher.finish()
    }

    /// One cost record per AWS and Azure service, 16 in total
    pub fn cost_records(&self) -> Vec<CostRecord> {
        let period = CostPeriod {
            start: Utc::now() - Duration::days(30),
            end: Utc::now(),
        };

        let aws = AWS_SERVICES.iter().enumerate().map(|(i, service)| {
            let mut tags = HashMap::new();
            tags.insert("environment".to_string(), "production".to_string());
            tags.insert(
                "team".to_string(),
                if i % 2 == 0 { "backend" } else { "frontend" }.to_string(),
            );

            CostRecord {
                id: format!("aws-{}", i + 1),
                platform: Platform::Aws,
                resource_type: service.to_string(),
                resource_name: format!("{}-prod-{}", service, i + 1),
                cost: self.value_in(i as u64, 50, 5000),
                currency: "USD".to_string(),
                period,
                tags,
            }
        });

        let azure = AZURE_SERVICES.iter().enumerate().map(|(i, service)| {
            let mut tags = HashMap::new();
            tags.insert("environment".to_string(), "production".to_string());
            tags.insert(
                "team".to_string(),
                if i % 2 == 0 { "devops" } else { "data" }.to_string(),
            );

            CostRecord {
                id: format!("azure-{}", i + 1),
                platform: Platform::Azure,
                resource_type: service.to_string(),
                resource_name: format!(
                    "{}-prod-{}",
                    service.replace(' ', "-").to_lowercase(),
                    i + 1
                ),
                cost: self.value_in(100 + i as u64, 50, 5000),
                currency: "USD".to_string(),
                period,
                tags,
            }
        });

        aws.chain(azure).collect()
    }

    /// Inventory resources joined to [`Self::cost_records`] by id
    pub fn cloud_resources(&self) -> Vec<CloudResource> {
        self.cost_records()
            .into_iter()
            .enumerate()
            .map(|(i, record)| CloudResource {
                id: record.id,
                name: record.resource_name,
                resource_type: record.resource_type,
                platform: record.platform,
                region: match record.platform {
                    Platform::Aws => "us-east-1".to_string(),
                    Platform::Azure => "East US".to_string(),
                },
                status: if i % 5 == 4 {
                    ResourceStatus::Stopped
                } else {
                    ResourceStatus::Running
                },
                utilization: self.value_in(200 + i as u64, 0, 100),
                cost: record.cost,
                last_updated: Utc::now(),
            })
            .collect()
    }

    /// The four canonical optimization recommendations
    ///
    /// Savings [1200, 800, 2500, 600] with priorities [1, 2, 1, 3], which
    /// exercises both sort modes and their tie handling.
    pub fn recommendations(&self) -> Vec<OptimizationRecommendation> {
        vec![
            OptimizationRecommendation {
                id: "opt-1".to_string(),
                recommendation_type: RecommendationType::Rightsizing,
                title: "Rightsize EC2 instances".to_string(),
                description: "Several EC2 instances are running at low utilization.".to_string(),
                potential_savings: 1200.0,
                effort: EffortLevel::Medium,
                resources: vec!["aws-1".to_string(), "aws-2".to_string()],
                priority: 1,
            },
            OptimizationRecommendation {
                id: "opt-2".to_string(),
                recommendation_type: RecommendationType::Scheduling,
                title: "Schedule non-production resources".to_string(),
                description: "Development environments can run only during business hours."
                    .to_string(),
                potential_savings: 800.0,
                effort: EffortLevel::Low,
                resources: vec!["azure-1".to_string(), "azure-3".to_string()],
                priority: 2,
            },
            OptimizationRecommendation {
                id: "opt-3".to_string(),
                recommendation_type: RecommendationType::ReservedInstances,
                title: "Purchase Reserved Instances".to_string(),
                description: "High-utilization resources would benefit from RI pricing."
                    .to_string(),
                potential_savings: 2500.0,
                effort: EffortLevel::Low,
                resources: vec![
                    "aws-3".to_string(),
                    "aws-4".to_string(),
                    "azure-2".to_string(),
                ],
                priority: 1,
            },
            OptimizationRecommendation {
                id: "opt-4".to_string(),
                recommendation_type: RecommendationType::StorageOptimization,
                title: "Optimize storage classes".to_string(),
                description: "Move infrequently accessed data to cheaper storage tiers."
                    .to_string(),
                potential_savings: 600.0,
                effort: EffortLevel::Medium,
                resources: vec!["aws-2".to_string(), "azure-1".to_string()],
                priority: 3,
            },
        ]
    }

    /// A window of `days` contiguous daily trend points ending today
    pub fn trend_points(&self, days: usize) -> Vec<TrendPoint> {
        let today = Utc::now().date_naive();
        (0..days)
            .map(|i| {
                let date = today - Duration::days((days - 1 - i) as i64);
                TrendPoint::new(
                    date,
                    self.value_in(300 + i as u64, 800, 1500),
                    self.value_in(400 + i as u64, 600, 1200),
                )
            })
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert two floats are equal within a small tolerance
    pub fn assert_close(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: expected {}, got {}",
            context,
            expected,
            actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(
            builder1.cost_records()[0].cost,
            builder2.cost_records()[0].cost
        );
        assert_eq!(
            builder1.name("snapshot", "main"),
            builder2.name("snapshot", "main")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(
            builder1.cost_records()[0].cost,
            builder2.cost_records()[0].cost
        );
    }

    #[test]
    fn test_fixture_shapes() {
        let builder = TestDataBuilder::from_test_name("fixture_shapes");

        let records = builder.cost_records();
        assert_eq!(records.len(), 16);
        assert!(records.iter().all(|r| r.cost >= 50.0 && r.cost < 5000.0));

        let resources = builder.cloud_resources();
        assert_eq!(resources.len(), records.len());
        assert!(resources.iter().all(|r| (0.0..100.0).contains(&r.utilization)));

        let points = builder.trend_points(30);
        assert_eq!(points.len(), 30);
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
    }
}
