use thiserror::Error;

/// Errors raised by the matching engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MatchError {
    /// A required profile was not supplied by the caller.
    pub fn missing_profile(role: &str) -> Self {
        MatchError::InvalidInput(format!("{} profile is required", role))
    }
}
