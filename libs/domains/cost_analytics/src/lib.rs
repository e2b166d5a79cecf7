//! Cost Analytics Domain
//!
//! In-memory analytics and query layer for the multi-cloud cost dashboard.
//! The upstream data source supplies a snapshot of raw records per refresh
//! cycle; this crate turns them into the derived view-models the dashboard
//! renders and returns semantic values only (numbers, enums, identifiers),
//! never display strings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  Data source                     │  ← snapshot per refresh
//! └──────┬──────────┬───────────┬──────────┬─────────┘
//!        │          │           │          │
//! ┌──────▼────┐ ┌───▼────┐ ┌────▼──────┐ ┌─▼───────┐
//! │ aggregate │ │ trend  │ │ recommen- │ │  query  │  ← grouping, ranking,
//! │           │ │        │ │ dations   │ │         │    filtering, paging
//! └──────┬────┘ └───┬────┘ └────┬──────┘ └─┬───────┘
//!        │          │           │          │
//! ┌──────▼──────────▼───────────▼──────────▼─────────┐
//! │                View-models                       │  → presentation layer
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Features
//!
//! - Platform and resource-type cost aggregation with percentage shares
//! - Trend statistics and period-over-period comparison
//! - Headline cost summary with top cost drivers
//! - Recommendation filtering and ranking by priority or savings
//! - Searchable, sortable, paginated resource inventory queries
//!
//! Every operation is synchronous and pure: inputs are borrowed immutably
//! and results are freshly constructed, so concurrent callers only need to
//! treat a snapshot as read-only while a call is in flight.

pub mod aggregate;
pub mod error;
pub mod models;
pub mod query;
pub mod recommendations;
pub mod summary;
pub mod trend;

// Re-export commonly used types
pub use error::{AnalyticsError, AnalyticsResult};
pub use models::{
    ChartPoint, CloudResource, CostPeriod, CostRecord, CostSummary, EffortLevel,
    OptimizationRecommendation, Platform, PlatformCosts, PlatformTypeAggregate,
    RecommendationSort, RecommendationType, ResourcePage, ResourceQuery, ResourceStatus,
    SortDirection, SortField, TrendPoint, TrendSummary,
};

// Re-export the headline operations
pub use query::query_resources;
pub use summary::build_summary;
