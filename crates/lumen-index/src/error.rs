//! Index error types for lumen-index.

/// Errors surfaced to callers of the structural index.
///
/// Malformed source never produces an error: unreadable items are dropped
/// and the model simply gets smaller.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("No entity lookup surface is available; structural model would be empty")]
    EntitySurfaceUnavailable,

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
