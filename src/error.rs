use thiserror::Error;

/// Errors surfaced by label computation and layout.
///
/// Every variant is raised before any drawing happens, so a failed call
/// never leaves a partial artifact behind.
#[derive(Debug, Error)]
pub enum VennError {
    /// Malformed caller data: zero groups, too many groups, or label codes
    /// whose width does not match the template's group count.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Mismatched name or color counts, or out-of-range canvas settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Percent labels requested while every group is empty.
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}
