use async_trait::async_trait;
use bb_core::{Result, StreamItem};

/// The forum side of the bot: a comment stream plus a way to answer.
#[async_trait]
pub trait ForumClient: Send + Sync {
    /// Log in and return the bot's account name.
    async fn authenticate(&self) -> Result<String>;

    /// Next comment from the stream. `Ok(None)` means the stream is exhausted.
    async fn next_item(&self) -> Result<Option<StreamItem>>;

    /// Post `body` as a reply to the item with `item_id`.
    async fn reply(&self, item_id: &str, body: &str) -> Result<()>;
}
