use thiserror::Error;

/// Reasons a session token could not be issued or verified
///
/// The route guard collapses every variant into "not authenticated"; the
/// distinction only matters for logging.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session secret is not configured")]
    MissingSecret,

    #[error("Session lifetime is too large")]
    LifetimeOverflow,

    #[error("Session token expired")]
    Expired,

    #[error("Session token invalid: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("Session token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("System clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
