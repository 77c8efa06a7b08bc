use thiserror::Error;

/// Top-level error type for plot geometry.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by point store mutations.
///
/// A failed mutation never modifies the store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("removal would leave {len} points, minimum is {min}")]
    BelowMinimum { min: usize, len: usize },

    #[error("point {id} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { id: String, x: f64, y: f64 },
}

/// Errors related to loading a [`Policy`](crate::config::Policy).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse policy: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`PlotError`].
pub type Result<T> = std::result::Result<T, PlotError>;
