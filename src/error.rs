use thiserror::Error;

/// Failure taxonomy for repository operations.
///
/// Every failure is surfaced to the caller as one of these variants; the
/// adapter never collapses an error into an empty list or a bare `false`.
/// The view layer decides presentation.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The caller-supplied note violates a local invariant. Raised before
    /// any network call is made.
    #[error("invalid note: {0}")]
    Validation(String),

    /// Notion answered with a non-success status.
    #[error("notion returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The request never completed (connect failure, timeout, ...).
    #[error("request to notion failed")]
    Transport(#[source] reqwest::Error),

    /// The response arrived but could not be parsed into the expected shape.
    /// Indicates contract drift with the remote store.
    #[error("unexpected notion response: {0}")]
    Schema(String),
}

impl NotesError {
    /// Whether a retry of the same request could plausibly succeed.
    /// Transport failures and server-side 5xx qualify; everything else
    /// (validation, 4xx, malformed responses) will fail the same way again.
    pub fn is_retriable(&self) -> bool {
        match self {
            NotesError::Transport(_) => true,
            NotesError::Remote { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
