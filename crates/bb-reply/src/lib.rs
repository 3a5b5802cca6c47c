//! Reply synthesis: one templated formatter per intent, each drawing flavor
//! text from a per-call seeded generator and numbers from the shared dataset.

pub mod seed;
pub mod templates;
pub mod cutoff;
pub mod admission;
pub mod comparison;
pub mod trend;
pub mod suggestion;
pub mod roast;
pub mod help;
pub mod compose;

pub use admission::{admission_reply, Chance};
pub use comparison::comparison_reply;
pub use compose::{compose, compose_at, reply_to};
pub use cutoff::{cutoff_reply, not_offered};
pub use help::help_reply;
pub use roast::roast_reply;
pub use seed::{derive_seed, reply_rng};
pub use suggestion::{suggestion_reply, tier_for};
pub use templates::CUTOFF_LINK;
pub use trend::trend_reply;

#[cfg(test)]
mod tests;
