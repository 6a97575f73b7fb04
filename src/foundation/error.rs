/// Convenience result type used across gridwalk.
pub type GridwalkResult<T> = Result<T, GridwalkError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum GridwalkError {
    /// Caller-provided argument outside its domain (grid side, offset fraction, moves).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Grid whose shape cannot be interpreted as a square N×N arrangement.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Two points that should span a segment coincide.
    #[error("degenerate segment: {0}")]
    DegenerateSegment(String),

    /// Invalid configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridwalkError {
    /// Build a [`GridwalkError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`GridwalkError::InvalidGrid`] value.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Build a [`GridwalkError::DegenerateSegment`] value.
    pub fn degenerate_segment(msg: impl Into<String>) -> Self {
        Self::DegenerateSegment(msg.into())
    }

    /// Build a [`GridwalkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridwalkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
