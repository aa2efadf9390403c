/// Errors surfaced by the chat system.
///
/// `Configuration` is fatal at startup and never constructed afterwards.
/// Everything else is recoverable: the controller or the HTTP layer turns it
/// into user-visible state and the conversation stays usable.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("missing configuration: {0}")]
    Configuration(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("failed to read file: {0}")]
    FileRead(String),
    #[error("no document is attached to the conversation")]
    MissingAttachment,
    #[error("{0}")]
    QueryFailed(String),
}
