//! Per-reply random source.
//!
//! Every reply gets its own `StdRng` seeded from the author, the normalized
//! comment and the time of the call. Nothing touches a shared generator.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// First 8 hex digits of `md5(author + text + unix_seconds)`.
pub fn derive_seed(author: &str, text: &str, at: DateTime<Utc>) -> u64 {
    let stamp = format!(
        "{author}{text}{}.{:06}",
        at.timestamp(),
        at.timestamp_subsec_micros()
    );
    let digest = format!("{:x}", md5::compute(stamp.as_bytes()));
    u64::from_str_radix(&digest[..8], 16).unwrap_or_default()
}

pub fn reply_rng(author: &str, text: &str, at: DateTime<Utc>) -> StdRng {
    StdRng::seed_from_u64(derive_seed(author, text, at))
}
