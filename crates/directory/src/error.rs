use thiserror::Error;

/// Failures on the way from a phone number to a placed call.
///
/// None of these are fatal: callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialError {
    /// Nothing left to dial after stripping whitespace.
    #[error("phone number is empty")]
    Empty,

    /// The number cannot be turned into a dialer address.
    #[error("invalid dial target {number:?}: {reason}")]
    Malformed { number: String, reason: String },

    /// No handler for the dialer scheme on this system.
    #[error("no dialer available for {scheme}:// (handler: {handler})")]
    Unavailable { scheme: String, handler: String },

    /// The handler accepted the request but the call attempt failed.
    #[error("call to {number} did not complete: {reason}")]
    NotCompleted { number: String, reason: String },
}
