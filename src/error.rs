//! Error types for control edits and configuration.

/// A control edit that was rejected. The engine state is left untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    /// Slider input did not start with a base-10 integer.
    #[error("invalid dimension input: {raw:?}")]
    InvalidDimension { raw: String },

    /// A frame dimension was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Background color was blank.
    #[error("background color must not be empty")]
    EmptyColor,
}

/// Configuration could not be read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value of the wrong shape.
    #[error("config parse failed: {var}={value:?}")]
    Parse { var: &'static str, value: String },
}
