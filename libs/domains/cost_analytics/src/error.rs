use thiserror::Error;

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur in the cost analytics domain
///
/// Every failure here is recoverable by the caller re-issuing a corrected
/// request. Zero-match filters, zero-total percentages, and pages beyond
/// the available data are defined non-error outcomes, not variants of this
/// enum.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// An operation that requires at least one element received none
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A summary over zero records would have undefined totals
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// An enum-typed parameter held a value outside its recognized set
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A pagination parameter was outside its positive range
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl From<strum::ParseError> for AnalyticsError {
    fn from(err: strum::ParseError) -> Self {
        AnalyticsError::InvalidParameter(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortField;
    use std::str::FromStr;

    #[test]
    fn test_strum_parse_error_maps_to_invalid_parameter() {
        let err: AnalyticsError = SortField::from_str("owner").unwrap_err().into();
        assert!(matches!(err, AnalyticsError::InvalidParameter(_)));
    }
}
