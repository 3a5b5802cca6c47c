//! Decides whether a stream item gets a reply at all. Runs before any
//! reply text is built.

use crate::processed::ProcessedSet;
use bb_core::{BotConfig, StreamItem};
use bb_router::Query;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Inactive,
    OwnComment,
    AlreadyProcessed,
    DeletedAuthor,
    DeniedAuthor,
    Locked,
    Archived,
    /// Not a `!` command and no classifier matched.
    NoIntent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::Inactive => "outside active hours",
            SkipReason::OwnComment => "own comment",
            SkipReason::AlreadyProcessed => "already processed",
            SkipReason::DeletedAuthor => "deleted author",
            SkipReason::DeniedAuthor => "deny-listed author",
            SkipReason::Locked => "locked",
            SkipReason::Archived => "archived",
            SkipReason::NoIntent => "no intent",
        };
        write!(f, "{s}")
    }
}

/// Gate checks in order, then classification. On success returns the
/// analyzed query so the caller does not classify twice.
pub fn should_respond(
    item: &StreamItem,
    own_name: &str,
    config: &BotConfig,
    processed: &ProcessedSet,
    active: bool,
) -> Result<Query, SkipReason> {
    if !active {
        return Err(SkipReason::Inactive);
    }
    let is_own = |name: &str| {
        name.eq_ignore_ascii_case(own_name) || name.eq_ignore_ascii_case(&config.username)
    };
    if item.author.as_deref().is_some_and(is_own) {
        return Err(SkipReason::OwnComment);
    }
    if processed.contains(&item.id) {
        return Err(SkipReason::AlreadyProcessed);
    }
    let Some(author) = item.author.as_deref() else {
        return Err(SkipReason::DeletedAuthor);
    };
    if config.is_denied_author(author) {
        return Err(SkipReason::DeniedAuthor);
    }
    if item.is_locked {
        return Err(SkipReason::Locked);
    }
    if item.is_archived {
        return Err(SkipReason::Archived);
    }

    let query = Query::analyze(Some(author), item.body.trim());
    if query.is_command() || query.is_actionable() {
        Ok(query)
    } else {
        Err(SkipReason::NoIntent)
    }
}
