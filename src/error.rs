use thiserror::Error;

/// Errors raised when simulation or sweep configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite non-negative rate (got {value})")]
    NegativeRate { field: &'static str, value: f64 },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("{axis} axis is empty (start index {start} > end index {end})")]
    EmptyAxis {
        axis: &'static str,
        start: u32,
        end: u32,
    },
}
