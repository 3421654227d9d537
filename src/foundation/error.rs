/// Convenience result type used across Morpho.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Invalid construction-time input: degenerate bounds, inverted
    /// thresholds, non-finite config numbers. The transition must not be
    /// constructed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Per-call rejection of NaN or infinite progress values.
    #[error("invalid progress: {0}")]
    InvalidProgress(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`MorphError::InvalidProgress`] value.
    pub fn invalid_progress(msg: impl Into<String>) -> Self {
        Self::InvalidProgress(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
