//! Ids of comments already answered.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Shared, clone-cheap set of comment ids. `claim` is the only way in, so
/// two consumers can never both win the same id.
#[derive(Debug, Clone, Default)]
pub struct ProcessedSet {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl ProcessedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` if absent. Returns `true` when this call inserted it.
    pub fn claim(&self, id: &str) -> bool {
        self.inner.write().unwrap().insert(id.to_string())
    }

    /// Undo a claim after a failed reply so the comment can be retried.
    pub fn release(&self, id: &str) -> bool {
        self.inner.write().unwrap().remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().unwrap().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
