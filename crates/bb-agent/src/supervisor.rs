//! Keeps sessions running across active periods.

use crate::forum::ForumClient;
use crate::gate::ActivityGate;
use crate::session::{BotSession, SessionReport};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupervisorReport {
    pub cycles: usize,
    pub sessions: Vec<SessionReport>,
    pub errors: usize,
}

pub struct Supervisor<C, G> {
    session: BotSession<C, G>,
}

impl<C: ForumClient, G: ActivityGate> Supervisor<C, G> {
    pub fn new(session: BotSession<C, G>) -> Self {
        Self { session }
    }

    async fn wait_until_active(&self) {
        let poll = Duration::from_secs(self.session.config().supervisor.idle_poll_secs);
        while !self.session.gate().is_active_now() {
            info!(poll_secs = poll.as_secs(), "waiting for active hours");
            sleep(poll).await;
        }
        info!("active hours reached");
    }

    /// Wait for active hours, run a session, cool down, repeat. Runs forever
    /// unless `max_cycles` is given.
    pub async fn run(&self, max_cycles: Option<usize>) -> SupervisorReport {
        let cooldown = Duration::from_secs(self.session.config().supervisor.cooldown_secs);
        let mut report = SupervisorReport::default();

        while max_cycles.map_or(true, |max| report.cycles < max) {
            self.wait_until_active().await;
            info!(cycle = report.cycles + 1, "starting session");
            match self.session.run().await {
                Ok(session) => report.sessions.push(session),
                Err(e) if e.is_transient() => {
                    warn!(error = %e, "session ended with a transient error");
                    report.errors += 1;
                }
                Err(e) => {
                    error!(error = %e, "session failed");
                    report.errors += 1;
                }
            }
            report.cycles += 1;
            info!(cooldown_secs = cooldown.as_secs(), "session stopped, cooling down");
            sleep(cooldown).await;
        }
        report
    }
}
