//! One active period of the bot: authenticate, consume the stream, reply.

use crate::eligibility::should_respond;
use crate::forum::ForumClient;
use crate::gate::ActivityGate;
use crate::processed::ProcessedSet;
use bb_core::{BotConfig, Result, StreamItem};
use bb_reply::reply_to;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Started or ran into inactive hours.
    Inactive,
    /// The stream returned no more items.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub end: SessionEnd,
    pub replied: usize,
    pub skipped: usize,
    pub failed: usize,
    pub restarts: usize,
}

impl SessionReport {
    fn new(end: SessionEnd) -> Self {
        Self { end, replied: 0, skipped: 0, failed: 0, restarts: 0 }
    }
}

pub struct BotSession<C, G> {
    client: Arc<C>,
    gate: Arc<G>,
    config: Arc<BotConfig>,
    processed: ProcessedSet,
}

impl<C: ForumClient, G: ActivityGate> BotSession<C, G> {
    pub fn new(client: Arc<C>, gate: Arc<G>, config: Arc<BotConfig>) -> Self {
        Self::with_processed(client, gate, config, ProcessedSet::new())
    }

    pub fn with_processed(
        client: Arc<C>,
        gate: Arc<G>,
        config: Arc<BotConfig>,
        processed: ProcessedSet,
    ) -> Self {
        Self { client, gate, config, processed }
    }

    pub fn processed(&self) -> &ProcessedSet {
        &self.processed
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Run until inactive hours or the end of the stream. Only a failed
    /// initial login is an error; stream failures are retried in place.
    pub async fn run(&self) -> Result<SessionReport> {
        if !self.gate.is_active_now() {
            info!("starting during inactive hours, nothing to do");
            return Ok(SessionReport::new(SessionEnd::Inactive));
        }

        let me = self.client.authenticate().await?;
        info!(account = %me, subreddit = %self.config.subreddit, "session started");

        let mut report = SessionReport::new(SessionEnd::Exhausted);
        loop {
            if !self.gate.is_active_now() {
                info!("reached inactive hours, stopping session");
                report.end = SessionEnd::Inactive;
                break;
            }
            match self.client.next_item().await {
                Ok(Some(item)) => self.handle(&me, item, &mut report).await,
                Ok(None) => {
                    info!("stream exhausted");
                    break;
                }
                Err(e) => {
                    report.restarts += 1;
                    self.recover(&e).await;
                }
            }
        }

        info!(
            replied = report.replied,
            skipped = report.skipped,
            failed = report.failed,
            restarts = report.restarts,
            "session finished"
        );
        Ok(report)
    }

    async fn handle(&self, me: &str, item: StreamItem, report: &mut SessionReport) {
        let active = self.gate.is_active_now();
        let query = match should_respond(&item, me, &self.config, &self.processed, active) {
            Ok(query) => query,
            Err(reason) => {
                debug!(id = %item.id, %reason, "skipping comment");
                report.skipped += 1;
                return;
            }
        };

        if !self.processed.claim(&item.id) {
            debug!(id = %item.id, "claimed elsewhere, skipping");
            report.skipped += 1;
            return;
        }

        let body = reply_to(&query);
        match self.client.reply(&item.id, &body).await {
            Ok(()) => {
                info!(
                    id = %item.id,
                    author = item.author.as_deref().unwrap_or_default(),
                    intent = ?query.intent,
                    "replied"
                );
                report.replied += 1;
                sleep(self.reply_delay()).await;
            }
            Err(e) => {
                self.processed.release(&item.id);
                error!(id = %item.id, error = %e, "failed to reply");
                report.failed += 1;
            }
        }
    }

    /// Uniform pause between replies.
    fn reply_delay(&self) -> Duration {
        let delay = self.config.reply_delay;
        let secs = rand::thread_rng().gen_range(delay.min_secs..=delay.max_secs);
        Duration::from_secs(secs)
    }

    async fn recover(&self, err: &bb_core::BotError) {
        let retry = self.config.retry;
        warn!(error = %err, delay_secs = retry.restart_delay_secs, "stream failed, restarting");
        sleep(Duration::from_secs(retry.restart_delay_secs)).await;
        match self.client.authenticate().await {
            Ok(account) => info!(%account, "reconnected"),
            Err(e) => {
                error!(error = %e, delay_secs = retry.reconnect_delay_secs, "reconnection failed, will retry");
                sleep(Duration::from_secs(retry.reconnect_delay_secs)).await;
            }
        }
    }
}
