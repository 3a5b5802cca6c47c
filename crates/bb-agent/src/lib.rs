//! Forum-facing orchestration for the BITSAT bot.
//!
//! Wraps the pure router and reply crates with the parts that touch the
//! outside world: the comment stream, the active-hours clock, reply pacing
//! and restart handling.

pub mod eligibility;
pub mod forum;
pub mod gate;
pub mod processed;
pub mod replay;
pub mod session;
pub mod supervisor;
pub mod telemetry;

pub use eligibility::{should_respond, SkipReason};
pub use forum::ForumClient;
pub use gate::{ActivityGate, AlwaysActive, ClockGate};
pub use processed::ProcessedSet;
pub use replay::{PostedReply, ReplayForum};
pub use session::{BotSession, SessionEnd, SessionReport};
pub use supervisor::{Supervisor, SupervisorReport};
pub use telemetry::init_tracing;
