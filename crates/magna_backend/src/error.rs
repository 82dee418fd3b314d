//! Error types for the backend boundary

use thiserror::Error;

/// Errors that can cross the backend boundary.
///
/// The backend defines no structured error codes; it surfaces message
/// strings. Transport and backend failures carry those strings through
/// unchanged so [`SubmitError::classify`] can pattern-match them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Request never completed (network, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend rejected the request
    #[error("{0}")]
    Rejected(String),

    /// No authenticated session where one was required
    #[error("not signed in")]
    NoSession,
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Submit-level classification of a backend failure.
///
/// Local validation produces field-keyed messages; everything the backend
/// itself rejects collapses to one of these, distinguished only by the
/// backend's message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Wrong email/password combination
    InvalidCredentials,
    /// The account exists but its email was never confirmed
    EmailNotConfirmed,
    /// Sign-up hit an existing account
    AlreadyRegistered,
    /// Anything else; carries the backend's message verbatim
    Other(String),
}

impl SubmitError {
    /// Classify a backend message string
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("invalid login credentials") {
            SubmitError::InvalidCredentials
        } else if lower.contains("email not confirmed") {
            SubmitError::EmailNotConfirmed
        } else if lower.contains("already registered") || lower.contains("already exists") {
            SubmitError::AlreadyRegistered
        } else {
            SubmitError::Other(message.to_string())
        }
    }

    /// The inline message shown above the submit button
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::InvalidCredentials => "Invalid email or password".to_string(),
            SubmitError::EmailNotConfirmed => {
                "Please confirm your email address before signing in".to_string()
            }
            SubmitError::AlreadyRegistered => {
                "An account with this email already exists".to_string()
            }
            SubmitError::Other(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<&BackendError> for SubmitError {
    fn from(err: &BackendError) -> Self {
        match err {
            BackendError::Rejected(msg) | BackendError::Transport(msg) => Self::classify(msg),
            BackendError::NoSession => SubmitError::Other(err.to_string()),
        }
    }
}
