use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};

/// Cloud platform identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[default]
    Aws,
    Azure,
}

/// Lifecycle status of an inventory resource
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceStatus {
    #[default]
    Running,
    Stopped,
    Terminated,
}

/// Optimization recommendation category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RecommendationType {
    #[default]
    Rightsizing,
    Scheduling,
    ReservedInstances,
    StorageOptimization,
}

/// Qualitative implementation cost of acting on a recommendation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EffortLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Billing period covered by a cost record
///
/// `start <= end` is the data source's contract; the core does not
/// re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct CostPeriod {
    #[ts(as = "String")]
    pub start: DateTime<Utc>,
    #[ts(as = "String")]
    pub end: DateTime<Utc>,
}

/// Immutable cost fact supplied by the upstream data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    pub id: String,
    pub platform: Platform,
    pub resource_type: String,
    pub resource_name: String,
    /// Non-negative cost for the period
    pub cost: f64,
    pub currency: String,
    pub period: CostPeriod,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Tracked inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CloudResource {
    pub id: String,
    pub name: String,
    /// Free-text resource category (e.g. "EC2", "SQL Database")
    #[serde(rename = "type")]
    pub resource_type: String,
    pub platform: Platform,
    pub region: String,
    pub status: ResourceStatus,
    /// Capacity in use, 0-100
    pub utilization: f64,
    /// Monthly cost
    pub cost: f64,
    #[ts(as = "String")]
    pub last_updated: DateTime<Utc>,
}

/// Actionable cost optimization suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub title: String,
    pub description: String,
    /// Estimated monthly savings if acted on
    pub potential_savings: f64,
    pub effort: EffortLevel,
    /// Ids of the resources this recommendation references
    pub resources: Vec<String>,
    /// 1 = most urgent; ordering is ascending
    pub priority: u32,
}

/// One calendar day of spend across both platforms
///
/// The daily total is always `aws + azure`; it is derived at construction
/// (and re-derived on deserialization) so it can never be set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(from = "TrendPointWire")]
pub struct TrendPoint {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub aws: f64,
    pub azure: f64,
    total: f64,
}

impl TrendPoint {
    pub fn new(date: NaiveDate, aws: f64, azure: f64) -> Self {
        Self {
            date,
            aws,
            azure,
            total: aws + azure,
        }
    }

    /// Combined spend for the day
    pub fn total(&self) -> f64 {
        self.total
    }
}

#[derive(Debug, Deserialize)]
struct TrendPointWire {
    date: NaiveDate,
    aws: f64,
    azure: f64,
}

impl From<TrendPointWire> for TrendPoint {
    fn from(wire: TrendPointWire) -> Self {
        TrendPoint::new(wire.date, wire.aws, wire.azure)
    }
}

// ===== Derived view-models =====

/// Per-platform cost totals with a grand total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct PlatformCosts {
    pub aws: f64,
    pub azure: f64,
    pub total: f64,
}

impl PlatformCosts {
    /// Build a breakdown whose total is `aws + azure` by construction
    pub fn new(aws: f64, azure: f64) -> Self {
        Self {
            aws,
            azure,
            total: aws + azure,
        }
    }
}

/// Aggregate for one (platform, resource type) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTypeAggregate {
    pub platform: Platform,
    pub resource_type: String,
    pub cost: f64,
    pub count: usize,
}

/// Statistics derived from a window of daily trend points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub projected_monthly: f64,
}

/// Headline cost summary for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub total_cost: f64,
    /// Signed percentage vs. the prior period
    pub monthly_trend: f64,
    /// The 5 highest-cost records, descending
    pub top_cost_drivers: Vec<CostRecord>,
    pub platform_breakdown: PlatformCosts,
}

/// Per-record chart series point (semantic values only, no display strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
    pub platform: Platform,
}

// ===== Query parameters =====

/// Recommendation ordering mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationSort {
    #[default]
    Priority,
    Savings,
}

/// Sortable columns of the resource inventory
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
    Name,
    Type,
    Platform,
    #[default]
    Cost,
    Utilization,
    Status,
}

/// Sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, ToSchema, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Resource inventory query parameters
///
/// Defaults mirror the inventory table's initial state: no filters, sorted
/// by cost descending, first page of 10.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuery {
    /// Case-insensitive match against resource name or type; empty matches all
    #[serde(default)]
    pub search: String,
    /// None retains all platforms
    pub platform: Option<Platform>,
    /// None retains all statuses
    pub status: Option<ResourceStatus>,
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_dir: SortDirection,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            platform: None,
            status: None,
            sort_field: SortField::default(),
            sort_dir: SortDirection::default(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

/// One page of resource query results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePage {
    pub items: Vec<CloudResource>,
    /// Count after filtering, before pagination
    pub total_matched: usize,
    /// Always at least 1, even for zero matches
    pub total_pages: usize,
}
