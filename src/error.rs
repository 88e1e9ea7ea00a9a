use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    /// Malformed operating hours. Fatal for the venue in question; the
    /// caller must not render a slot grid from it.
    #[error("invalid venue configuration: {0}")]
    InvalidConfiguration(String),

    /// No valid session. The caller redirects to login and returns here.
    #[error("authentication required")]
    Unauthenticated,

    /// Terms of use not accepted; nothing was sent.
    #[error("terms of use must be accepted before booking")]
    PreconditionFailed,

    /// The slot was taken between the last availability fetch and
    /// submission. Recoverable: refetch and pick another time.
    #[error("slot no longer available: {0}")]
    Conflict(String),

    /// The server rejected the request as malformed.
    #[error("booking rejected: {0}")]
    Validation(String),

    /// Transport-level failure. The caller may retry manually; there is
    /// no automatic retry.
    #[error("network error: {0}")]
    Network(String),
}

impl BookingError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, BookingError::Conflict(_))
    }
}
