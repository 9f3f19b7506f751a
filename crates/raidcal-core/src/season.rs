//! Season records: the derived view of one raid season.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
  Error, Result,
  catalog::{RaidDefinition, RaidId, RaidType, RawSeason, SeasonId},
  clock::{self, ReferenceDay},
  projection::TargetOutlook,
};

/// A raw season joined with its raid metadata and day arithmetic.
///
/// Never stored; recomputed on every build against a single
/// [`ReferenceDay`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRecord {
  pub season_id:       SeasonId,
  pub season_display:  String,
  pub terrain:         String,
  pub start:           i64,
  pub end:             i64,
  pub raid_id:         RaidId,
  pub raid_type:       RaidType,
  pub start_formatted: String,
  pub end_formatted:   String,
  /// Whole days from the reference day to the start; negative once aired.
  pub days_until:      i64,
  pub raid_name:       String,
  pub raid_icon:       String,
  pub raid_path:       String,
  /// Target-region outlook. `None` when the home region is the target.
  pub target:          Option<TargetOutlook>,
}

/// Build a [`SeasonRecord`] from a raw season. No projection is attached.
///
/// Fails with [`Error::MissingRaidDefinition`] when the season's raid id is
/// absent from `raids`; that means the feed itself is inconsistent.
pub fn normalize(
  raw: &RawSeason,
  raid_type: RaidType,
  raids: &HashMap<RaidId, RaidDefinition>,
  today: ReferenceDay,
) -> Result<SeasonRecord> {
  let raid = raids
    .get(&raw.raid_id)
    .ok_or(Error::MissingRaidDefinition { raid_id: raw.raid_id, season_id: raw.season_id })?;

  let formatted = |timestamp: i64| {
    clock::format_timestamp(timestamp)
      .ok_or(Error::TimestampOutOfRange { season_id: raw.season_id, timestamp })
  };

  Ok(SeasonRecord {
    season_id: raw.season_id,
    season_display: raw.season_display.clone(),
    terrain: raw.terrain.clone(),
    start: raw.start,
    end: raw.end,
    raid_id: raw.raid_id,
    raid_type,
    start_formatted: formatted(raw.start)?,
    end_formatted: formatted(raw.end)?,
    days_until: today.day_offset(raw.start),
    raid_name: raid.name.clone(),
    raid_icon: raid.icon(),
    raid_path: raid.path_name.clone(),
    target: None,
  })
}
