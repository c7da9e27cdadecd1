//! Domain error types.
//!
//! These errors represent validation failures and unresolvable lookups at the
//! engine boundary. They are distinct from catalog/IO errors.

/// Errors returned by the recommendation engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Malformed, missing or out-of-range input
    #[error("invalid input: {0}")]
    Validation(String),

    /// Empty candidate set or unresolvable reference
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal invariant violated (e.g. a non-finite cost)
    #[error("computation failed: {0}")]
    Computation(String),
}

impl EngineError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }

    /// Shorthand for a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        EngineError::NotFound(message.into())
    }

    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Validation(message) => format!("Invalid input: {message}"),
            EngineError::NotFound(_) => "No destinations matched your search.".to_string(),
            EngineError::Computation(_) => {
                "Something went wrong while scoring destinations.".to_string()
            }
        }
    }
}
