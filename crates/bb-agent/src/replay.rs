//! Offline forum backed by a JSON-lines file of stream items.

use crate::forum::ForumClient;
use async_trait::async_trait;
use bb_core::{BotError, Result, StreamItem};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedReply {
    pub item_id: String,
    pub body: String,
}

/// Serves items in file order and records replies instead of posting them.
#[derive(Debug)]
pub struct ReplayForum {
    account: String,
    items: Mutex<VecDeque<StreamItem>>,
    replies: Mutex<Vec<PostedReply>>,
}

impl ReplayForum {
    pub fn new(account: impl Into<String>, items: impl IntoIterator<Item = StreamItem>) -> Self {
        Self {
            account: account.into(),
            items: Mutex::new(items.into_iter().collect()),
            replies: Mutex::new(Vec::new()),
        }
    }

    /// One `StreamItem` JSON object per line; blank lines and `#` comments are ignored.
    pub fn from_jsonl_str(account: impl Into<String>, text: &str) -> Result<Self> {
        let mut items = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let item: StreamItem = serde_json::from_str(line).map_err(|e| {
                BotError::Forum(format!("replay line {}: {e}", n + 1))
            })?;
            items.push(item);
        }
        Ok(Self::new(account, items))
    }

    pub fn from_file(account: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_jsonl_str(account, &text)
    }

    pub fn replies(&self) -> Vec<PostedReply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl ForumClient for ReplayForum {
    async fn authenticate(&self) -> Result<String> {
        Ok(self.account.clone())
    }

    async fn next_item(&self) -> Result<Option<StreamItem>> {
        Ok(self.items.lock().unwrap().pop_front())
    }

    async fn reply(&self, item_id: &str, body: &str) -> Result<()> {
        self.replies.lock().unwrap().push(PostedReply {
            item_id: item_id.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
