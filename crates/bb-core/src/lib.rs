//! Shared types, configuration and the embedded cutoff dataset.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod types;

pub use catalog::{Branch, Campus, ProgramType};
pub use config::BotConfig;
pub use dataset::{
    Dataset, PlacementStat, Prediction, PredictionMethod, TrendSeries, YearPoint, MAX_SCORE,
    SNAPSHOT_YEAR, TREND_YEARS,
};
pub use error::{BotError, Result};
pub use types::{ItemStatus, StreamItem};

#[cfg(test)]
mod tests;
