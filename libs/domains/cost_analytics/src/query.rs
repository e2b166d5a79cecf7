//! Resource inventory querying
//!
//! Filter, sort, and paginate the cloud resource inventory. Stages run in
//! a fixed order (validate, filter, sort, paginate) and the sort is stable,
//! so pagination is deterministic across repeated queries on identical
//! input.

use std::cmp::Ordering;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{CloudResource, ResourcePage, ResourceQuery, SortDirection, SortField};

/// Run an inventory query and return one page of results
///
/// `total_matched` counts resources passing the filter stage alone,
/// independent of sort and pagination parameters. A page number beyond the
/// available data yields an empty page, not an error; only non-positive
/// pagination parameters are rejected.
pub fn query_resources(
    resources: &[CloudResource],
    params: &ResourceQuery,
) -> AnalyticsResult<ResourcePage> {
    validate(params)?;

    let mut matched: Vec<&CloudResource> = resources
        .iter()
        .filter(|resource| matches_filters(resource, params))
        .collect();

    let compare = comparator(params.sort_field);
    matched.sort_by(|a, b| match params.sort_dir {
        SortDirection::Asc => compare(a, b),
        SortDirection::Desc => compare(a, b).reverse(),
    });

    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(params.page_size).max(1);

    let start = (params.page - 1).saturating_mul(params.page_size);
    let items: Vec<CloudResource> = matched
        .into_iter()
        .skip(start)
        .take(params.page_size)
        .cloned()
        .collect();

    tracing::debug!(
        total_matched,
        total_pages,
        page = params.page,
        returned = items.len(),
        "evaluated resource query"
    );

    Ok(ResourcePage {
        items,
        total_matched,
        total_pages,
    })
}

/// Reject non-positive pagination parameters before any slicing
fn validate(params: &ResourceQuery) -> AnalyticsResult<()> {
    if params.page == 0 {
        return Err(AnalyticsError::OutOfRange(
            "page must be a positive integer".to_string(),
        ));
    }
    if params.page_size == 0 {
        return Err(AnalyticsError::OutOfRange(
            "page size must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn matches_filters(resource: &CloudResource, params: &ResourceQuery) -> bool {
    let matches_search = params.search.is_empty() || {
        let needle = params.search.to_lowercase();
        resource.name.to_lowercase().contains(&needle)
            || resource.resource_type.to_lowercase().contains(&needle)
    };

    let matches_platform = params.platform.is_none_or(|p| resource.platform == p);
    let matches_status = params.status.is_none_or(|s| resource.status == s);

    matches_search && matches_platform && matches_status
}

/// Comparator strategy for a sort field
///
/// Cost and utilization compare numerically; every other field compares as
/// case-insensitive text. The closed [`SortField`] set keeps the
/// recognized-field list enumerable instead of relying on dynamic field
/// access.
fn comparator(field: SortField) -> impl Fn(&CloudResource, &CloudResource) -> Ordering {
    move |a, b| match field {
        SortField::Name => text_cmp(&a.name, &b.name),
        SortField::Type => text_cmp(&a.resource_type, &b.resource_type),
        SortField::Platform => text_cmp(&a.platform.to_string(), &b.platform.to_string()),
        SortField::Cost => a.cost.total_cmp(&b.cost),
        SortField::Utilization => a.utilization.total_cmp(&b.utilization),
        SortField::Status => text_cmp(&a.status.to_string(), &b.status.to_string()),
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
