use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Forum error: {0}")]
    Forum(String),
    #[error("Reply to {id} failed: {reason}")]
    ReplyFailed { id: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BotError {
    /// Whether the reply loop should back off and retry instead of giving up.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            BotError::Forum(_) | BotError::ReplyFailed { .. } | BotError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
