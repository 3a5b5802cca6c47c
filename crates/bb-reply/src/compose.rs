//! Dispatch from a routed [`Query`] to its synthesizer.

use crate::admission::admission_reply;
use crate::comparison::comparison_reply;
use crate::cutoff::cutoff_reply;
use crate::help::help_reply;
use crate::roast::roast_reply;
use crate::seed::reply_rng;
use crate::suggestion::suggestion_reply;
use crate::trend::trend_reply;
use bb_core::Dataset;
use bb_router::{Intent, Query};
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

/// How the bot addresses an author it cannot name.
pub const ANONYMOUS: &str = "bro";

pub fn display_name(query: &Query) -> &str {
    query.author.as_deref().filter(|a| !a.is_empty()).unwrap_or(ANONYMOUS)
}

/// Build the reply for `query`. Total: always returns text, even for a query
/// with no intent (which gets the fallback roast).
pub fn compose<R: Rng + ?Sized>(query: &Query, data: &Dataset, rng: &mut R) -> String {
    let name = display_name(query);
    let e = &query.entities;
    match query.intent.unwrap_or(Intent::Fallback) {
        Intent::Help => help_reply(name),
        Intent::AdmissionChance => admission_reply(name, e.branch, e.campus, e.score, data, rng),
        Intent::Comparison => comparison_reply(name, e.comparison, data, rng),
        Intent::Trend => trend_reply(name, e.branch, e.campus, data, rng),
        Intent::Suggestion => suggestion_reply(name, e.branch, e.campus, e.score, data, rng),
        Intent::Cutoff => cutoff_reply(name, e.branch, e.campus, data, rng),
        Intent::Fallback => {
            let words = bb_text::meaningful_tokens(&query.normalized_text);
            roast_reply(name, &words, rng)
        }
    }
}

/// [`compose`] with a generator seeded from the author, the text and `at`.
pub fn compose_at(query: &Query, data: &Dataset, at: DateTime<Utc>) -> String {
    let mut rng = reply_rng(display_name(query), &query.normalized_text, at);
    debug!(intent = ?query.intent, at = %at, "composing reply");
    compose(query, data, &mut rng)
}

/// Reply for `query` against the global dataset, seeded with the current time.
pub fn reply_to(query: &Query) -> String {
    compose_at(query, Dataset::global(), Utc::now())
}
