//! Error types for `raidcal-core`.

use thiserror::Error;

use crate::catalog::{RaidId, SeasonId};

/// Catalog-level failures. Any of these aborts the schedule build.
#[derive(Debug, Error)]
pub enum Error {
  #[error("season {season_id} references unknown raid {raid_id}")]
  MissingRaidDefinition { raid_id: RaidId, season_id: SeasonId },

  #[error("season {season_id} has an unrepresentable timestamp {timestamp}")]
  TimestampOutOfRange { season_id: SeasonId, timestamp: i64 },

  #[error("malformed catalog: {0}")]
  MalformedCatalog(String),

  #[error("unknown region: {0:?}")]
  UnknownRegion(String),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
