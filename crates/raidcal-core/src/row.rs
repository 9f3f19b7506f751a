//! Row presentation mapping.
//!
//! Flattens [`SeasonRecord`]s into display-ready rows for a [`RowSink`].
//! Resource links come from an injected [`ResourceLinks`] capability.
//!
//! [`RowSink`]: crate::capability::RowSink
//! [`ResourceLinks`]: crate::capability::ResourceLinks

use serde::Serialize;

use crate::{
  capability::ResourceLinks,
  catalog::{RaidType, SeasonId},
  clock::{self, ReferenceDay},
  projection::{ProjectionStatus, TargetOutlook},
  schedule::Schedule,
  season::SeasonRecord,
};

/// Rows whose target-region start lies this many days in the past or more
/// are never chosen by [`next_focus`].
pub const FOCUS_LOOKBACK_DAYS: i64 = 7;

/// A labelled external link for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
  pub label: String,
  pub url:   String,
}

/// The target-region cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetCell {
  /// Home and target are the same region.
  SameRegion,
  /// A confirmed or predicted target-region start.
  Scheduled {
    days:   i64,
    date:   String,
    status: ProjectionStatus,
  },
  /// The season could not be projected.
  Unknown,
}

impl TargetCell {
  pub fn days(&self) -> Option<i64> {
    match self {
      TargetCell::Scheduled { days, .. } => Some(*days),
      _ => None,
    }
  }
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
  pub season_id:       SeasonId,
  pub season_display:  String,
  pub raid_type:       RaidType,
  pub raid_name:       String,
  pub raid_icon:       String,
  pub raid_path:       String,
  pub terrain:         String,
  pub start:           i64,
  pub start_formatted: String,
  pub end_formatted:   String,
  pub date_range:      String,
  pub days_until:      i64,
  pub target:          TargetCell,
  pub resources:       Vec<ResourceLink>,
}

/// Map every season of `schedule` to a row, in schedule order.
pub fn map_rows<L>(schedule: &Schedule, links: &L) -> Vec<ScheduleRow>
where
  L: ResourceLinks + ?Sized,
{
  schedule
    .seasons
    .iter()
    .map(|season| map_row(season, schedule.today, links))
    .collect()
}

pub fn map_row<L>(season: &SeasonRecord, today: ReferenceDay, links: &L) -> ScheduleRow
where
  L: ResourceLinks + ?Sized,
{
  ScheduleRow {
    season_id:       season.season_id,
    season_display:  season.season_display.clone(),
    raid_type:       season.raid_type,
    raid_name:       season.raid_name.clone(),
    raid_icon:       season.raid_icon.clone(),
    raid_path:       season.raid_path.clone(),
    terrain:         season.terrain.clone(),
    start:           season.start,
    start_formatted: season.start_formatted.clone(),
    end_formatted:   season.end_formatted.clone(),
    date_range:      format!("{} - {}", season.start_formatted, season.end_formatted),
    days_until:      season.days_until,
    target:          target_cell(season.target.as_ref(), today),
    resources:       links.links_for(season),
  }
}

fn target_cell(outlook: Option<&TargetOutlook>, today: ReferenceDay) -> TargetCell {
  match outlook {
    None => TargetCell::SameRegion,
    Some(TargetOutlook::Unknown(_)) => TargetCell::Unknown,
    Some(TargetOutlook::Projected(p)) => match today.shifted(p.days_until_target) {
      Some(date) => TargetCell::Scheduled {
        days:   p.days_until_target,
        date:   clock::format_long(date),
        status: p.status,
      },
      None => TargetCell::Unknown,
    },
  }
}

/// Index of the row to highlight: the smallest target-region day offset
/// greater than `-FOCUS_LOOKBACK_DAYS`. The first such row wins on ties.
pub fn next_focus(rows: &[ScheduleRow]) -> Option<usize> {
  rows
    .iter()
    .enumerate()
    .filter_map(|(i, row)| row.target.days().map(|d| (i, d)))
    .filter(|(_, days)| *days > -FOCUS_LOOKBACK_DAYS)
    .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
    .map(|(i, _)| i)
}
