use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// The bot's own account name. Comments by this account are never answered.
    pub username: String,
    pub subreddit: String,
    pub active_hours: ActiveHoursConfig,
    pub reply_delay: ReplyDelayConfig,
    pub retry: RetryConfig,
    pub supervisor: SupervisorConfig,
    /// Lower-case substrings; an author whose name contains any of them is skipped.
    pub deny_list: Vec<String>,
}

/// Daily window in local hours. `end_hour` is exclusive and may be smaller
/// than `start_hour`, in which case the window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveHoursConfig {
    pub start_hour: u32,
    pub end_hour: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDelayConfig {
    pub min_secs: u64,
    pub max_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    pub restart_delay_secs: u64,
    pub reconnect_delay_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorConfig {
    pub idle_poll_secs: u64,
    pub cooldown_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            username: "No_Attendance_Bot".into(),
            subreddit: "bitsatards".into(),
            active_hours: ActiveHoursConfig {
                start_hour: 9,
                end_hour: 1,
            },
            reply_delay: ReplyDelayConfig {
                min_secs: 5,
                max_secs: 15,
            },
            retry: RetryConfig {
                restart_delay_secs: 30,
                reconnect_delay_secs: 60,
            },
            supervisor: SupervisorConfig {
                idle_poll_secs: 300,
                cooldown_secs: 60,
            },
            deny_list: [
                "automoderator",
                "automod",
                "moderator",
                "bot",
                "_bot",
                "reddit",
                "snapshillbot",
                "totesmessenger",
                "remindmebot",
                "wikisummarizerbot",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl ActiveHoursConfig {
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour == self.end_hour {
            return true;
        }
        if self.start_hour < self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

impl BotConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Defaults overridden by `REDDIT_USERNAME`, `BITSAT_SUBREDDIT`,
    /// `BITSAT_ACTIVE_START` and `BITSAT_ACTIVE_END`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(name) = lookup("REDDIT_USERNAME").filter(|v| !v.trim().is_empty()) {
            config.username = name.trim().to_string();
        }
        if let Some(sub) = lookup("BITSAT_SUBREDDIT").filter(|v| !v.trim().is_empty()) {
            config.subreddit = sub.trim().to_string();
        }
        if let Some(start) = lookup("BITSAT_ACTIVE_START") {
            config.active_hours.start_hour = parse_hour("BITSAT_ACTIVE_START", &start)?;
        }
        if let Some(end) = lookup("BITSAT_ACTIVE_END") {
            config.active_hours.end_hour = parse_hour("BITSAT_ACTIVE_END", &end)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let hours = self.active_hours;
        if hours.start_hour > 23 || hours.end_hour > 23 {
            return Err(BotError::Config(format!(
                "active hours must be within 0..=23, got {}..{}",
                hours.start_hour, hours.end_hour
            )));
        }
        if self.reply_delay.min_secs > self.reply_delay.max_secs {
            return Err(BotError::Config(format!(
                "reply delay min {}s exceeds max {}s",
                self.reply_delay.min_secs, self.reply_delay.max_secs
            )));
        }
        if self.username.trim().is_empty() {
            return Err(BotError::Config("username must not be empty".into()));
        }
        Ok(())
    }

    pub fn is_denied_author(&self, author: &str) -> bool {
        let lower = author.to_lowercase();
        self.deny_list.iter().any(|d| lower.contains(d.as_str()))
    }
}

fn parse_hour(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| BotError::Config(format!("{key}={value:?}: {e}")))
}
