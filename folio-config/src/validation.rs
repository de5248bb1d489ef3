use thiserror::Error;

/// Values that load fine but cannot be used safely.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("{field} must be a finite, non-negative threshold (got {value})")]
    InvalidThreshold { field: &'static str, value: f32 },
    #[error("{field} must be a finite, non-negative spacing (got {value})")]
    InvalidSpacing { field: &'static str, value: f32 },
}
