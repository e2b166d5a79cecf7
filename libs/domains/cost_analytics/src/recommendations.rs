//! Recommendation filtering and ranking
//!
//! Orders optimization recommendations for display, either by urgency
//! (ascending priority) or by potential savings (descending). The headline
//! savings total is deliberately computed over the unfiltered input so it
//! reflects all opportunities, not just the currently displayed subset.

use crate::models::{OptimizationRecommendation, RecommendationSort, RecommendationType};

/// Filter by category and order for display
///
/// A `None` filter retains every recommendation. Both sort modes are
/// stable: equal keys keep their input order. The input is never mutated;
/// a freshly ordered sequence is returned.
pub fn rank(
    recs: &[OptimizationRecommendation],
    filter: Option<RecommendationType>,
    sort: RecommendationSort,
) -> Vec<OptimizationRecommendation> {
    let mut ranked: Vec<OptimizationRecommendation> = recs
        .iter()
        .filter(|rec| filter.is_none_or(|t| rec.recommendation_type == t))
        .cloned()
        .collect();

    match sort {
        RecommendationSort::Priority => {
            ranked.sort_by(|a, b| a.priority.cmp(&b.priority));
        }
        RecommendationSort::Savings => {
            ranked.sort_by(|a, b| b.potential_savings.total_cmp(&a.potential_savings));
        }
    }

    ranked
}

/// Sum of potential savings across all recommendations, pre-filter
pub fn total_potential_savings(recs: &[OptimizationRecommendation]) -> f64 {
    recs.iter().map(|rec| rec.potential_savings).sum()
}
