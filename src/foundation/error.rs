/// Convenience result type used across ringsel.
pub type RingResult<T> = Result<T, RingError>;

/// Errors raised outside the decision path: configuration and scenario loading.
///
/// Decision functions never fail. Caller contract violations there are
/// `debug_assert!`s, not values of this type.
#[derive(thiserror::Error, Debug)]
pub enum RingError {
    /// Malformed policy override (environment variable or CLI value).
    #[error("config error: {0}")]
    Config(String),

    /// Snapshot data that breaks a data-model invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scenarios and decisions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingError {
    /// Build a [`RingError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RingError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RingError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
