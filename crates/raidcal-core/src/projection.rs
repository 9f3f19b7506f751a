//! Cross-region date projection.
//!
//! Given a home-region season, find when the target region runs (or will run)
//! its counterpart. A confirmed counterpart is looked up by id; otherwise the
//! date is extrapolated from the latest season the target region has
//! announced, assuming the home-region gap between that anchor and the
//! projected season carries over unchanged.

use serde::Serialize;
use thiserror::Error;

use crate::{
  catalog::{Catalog, RaidType, RawSeason, Region, RegionSeasons, SeasonId},
  clock::ReferenceDay,
  season::SeasonRecord,
};

// ─── Types ───────────────────────────────────────────────────────────────────

/// Whether the target-region date was announced or extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectionStatus {
  Confirmed,
  Predicted,
}

impl ProjectionStatus {
  pub fn label(self) -> &'static str {
    match self {
      ProjectionStatus::Confirmed => "Confirmed",
      ProjectionStatus::Predicted => "Predicted",
    }
  }
}

/// When the target region airs a home-region season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalProjection {
  /// Whole days from the reference day; negative if already aired.
  pub days_until_target: i64,
  pub status:            ProjectionStatus,
}

/// Why a single season could not be projected. Scoped to that season only.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ProjectionError {
  /// The latest target-region season has no home-region counterpart, or the
  /// target region has announced nothing of this raid type (`anchor` is
  /// `None`).
  #[error("no home-region equivalent for latest {raid_type} anchor (anchor season {anchor:?})")]
  NoAnchorEquivalent { raid_type: RaidType, anchor: Option<SeasonId> },
}

/// Target-region outcome attached to a [`SeasonRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outlook", content = "value", rename_all = "snake_case")]
pub enum TargetOutlook {
  Projected(GlobalProjection),
  Unknown(ProjectionError),
}

impl TargetOutlook {
  pub fn projection(&self) -> Option<&GlobalProjection> {
    match self {
      TargetOutlook::Projected(p) => Some(p),
      TargetOutlook::Unknown(_) => None,
    }
  }
}

impl From<Result<GlobalProjection, ProjectionError>> for TargetOutlook {
  fn from(result: Result<GlobalProjection, ProjectionError>) -> Self {
    match result {
      Ok(projection) => TargetOutlook::Projected(projection),
      Err(e) => TargetOutlook::Unknown(e),
    }
  }
}

// ─── Projection ──────────────────────────────────────────────────────────────

/// Project `season` from `home` into `target`.
///
/// Returns `None` when the regions are the same: nothing to project.
pub fn project(
  season: &SeasonRecord,
  catalog: &Catalog,
  home: Region,
  target: Region,
  today: ReferenceDay,
) -> Option<TargetOutlook> {
  if home == target {
    return None;
  }
  let outcome =
    project_between(season, home, catalog.region(home), catalog.region(target), today);
  if let Err(e) = &outcome {
    tracing::warn!(season_id = season.season_id, raid_type = %season.raid_type, "{e}");
  }
  Some(outcome.into())
}

/// Project `season` given both regions' calendars. `from` is the home
/// region and fixes the direction of the id offset.
pub fn project_between(
  season: &SeasonRecord,
  from: Region,
  home: &RegionSeasons,
  target: &RegionSeasons,
  today: ReferenceDay,
) -> Result<GlobalProjection, ProjectionError> {
  let raid_type = season.raid_type;
  let shift = raid_type.id_shift(from);
  let home_list = home.of(raid_type);
  let target_list = target.of(raid_type);

  let counterpart = season
    .season_id
    .checked_add(shift)
    .and_then(|id| target_list.iter().find(|s| s.season_id == id));

  if let Some(counterpart) = counterpart {
    tracing::debug!(
      season_id = season.season_id,
      counterpart = counterpart.season_id,
      "confirmed target-region season"
    );
    return Ok(GlobalProjection {
      days_until_target: today.day_offset(counterpart.start),
      status:            ProjectionStatus::Confirmed,
    });
  }

  let anchor = latest_announced(target_list)
    .ok_or(ProjectionError::NoAnchorEquivalent { raid_type, anchor: None })?;

  let anchor_home = home_list
    .iter()
    .find(|s| s.season_id.checked_add(shift) == Some(anchor.season_id))
    .ok_or(ProjectionError::NoAnchorEquivalent {
      raid_type,
      anchor: Some(anchor.season_id),
    })?;

  let days_until_target =
    today.day_offset(anchor.start) + season.days_until - today.day_offset(anchor_home.start);

  tracing::debug!(
    season_id = season.season_id,
    anchor = anchor.season_id,
    days_until_target,
    "predicted target-region season"
  );

  Ok(GlobalProjection { days_until_target, status: ProjectionStatus::Predicted })
}

/// The season with the greatest start. On an exact tie the earliest entry in
/// feed order wins.
fn latest_announced(seasons: &[RawSeason]) -> Option<&RawSeason> {
  seasons
    .iter()
    .reduce(|best, s| if s.start > best.start { s } else { best })
}
