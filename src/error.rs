/// Errors that can occur when using the chat0 configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Logical endpoint name is not one of CHAT, COMPLETION or HEALTH
    #[error("unknown endpoint `{0}`, expected one of CHAT, COMPLETION, HEALTH")]
    UnknownEndpoint(String),

    /// Provider name is not served by the backend
    #[error("unknown provider `{0}`, expected one of google, openai, openrouter")]
    UnknownProvider(String),

    /// Model is not in the supported catalog
    #[error("unsupported model: {0}")]
    UnsupportedModel(String),
}

/// Result type alias for chat0 configuration operations
pub type Result<T> = std::result::Result<T, Error>;
