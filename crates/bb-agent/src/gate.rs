//! "Should the bot be awake right now" predicates.

use bb_core::config::ActiveHoursConfig;
use chrono::{Local, Timelike};

pub trait ActivityGate: Send + Sync {
    fn is_active_now(&self) -> bool;
}

/// Active inside a daily local-time window.
#[derive(Debug, Clone, Copy)]
pub struct ClockGate {
    pub hours: ActiveHoursConfig,
}

impl ClockGate {
    pub fn new(hours: ActiveHoursConfig) -> Self {
        Self { hours }
    }
}

impl ActivityGate for ClockGate {
    fn is_active_now(&self) -> bool {
        self.hours.contains(Local::now().hour())
    }
}

/// Always active. Used by `replay --ignore-hours`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysActive;

impl ActivityGate for AlwaysActive {
    fn is_active_now(&self) -> bool {
        true
    }
}
