use serde::{Deserialize, Serialize};

/// A comment pulled off the forum stream, already resolved by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamItem {
    pub id: String,
    /// `None` for deleted or removed authors.
    #[serde(default)]
    pub author: Option<String>,
    pub body: String,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl StreamItem {
    pub fn new(id: impl Into<String>, author: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.map(str::to_string),
            body: body.into(),
            is_locked: false,
            is_archived: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    pub fn archived(mut self) -> Self {
        self.is_archived = true;
        self
    }

    pub fn status(&self) -> ItemStatus {
        ItemStatus {
            is_locked: self.is_locked,
            is_archived: self.is_archived,
        }
    }
}

/// Moderation state of an item as reported by the forum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    pub is_locked: bool,
    pub is_archived: bool,
}

impl ItemStatus {
    pub fn accepts_replies(&self) -> bool {
        !self.is_locked && !self.is_archived
    }
}
