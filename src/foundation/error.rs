/// Convenience result type used across the crate.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the configuration boundary.
///
/// Evaluating an armed profile never fails; these errors only come from
/// validating profile definitions and sampling requests.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided profile parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid sampling request (range or step).
    #[error("sampling error: {0}")]
    Sampling(String),

    /// Errors when serializing or deserializing profile definitions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Sampling`] value.
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
