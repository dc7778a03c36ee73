use thiserror::Error;

/// A runtime failure reported by the external player itself
///
/// The bridge never interprets these. They are handed to the declared
/// `EventKind::Error` callback, or returned from a rejected `play()`,
/// exactly as the player reported them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("external player error: {message}")]
pub struct ExternalRuntimeError {
    /// Host-provided error code, if the player supplied one
    pub code: Option<String>,
    /// Human readable description from the player
    pub message: String,
}

impl ExternalRuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Errors that can resolve a `play()` request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The player refused to start playback (autoplay policy, bad source, ...)
    #[error("Playback was rejected by the player: {0}")]
    Rejected(#[from] ExternalRuntimeError),

    /// The bridge was torn down before the queued call reached a player
    #[error("Bridge was detached before the play request reached a player")]
    Detached,
}
