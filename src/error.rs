use thiserror::Error;

/// Rejected tuning parameter.
///
/// Engine operations themselves never fail; only a parameter set can be
/// invalid, and the surfaces fall back to defaults when it is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must lie in {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },
}
