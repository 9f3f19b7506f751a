//! Schedule assembly: every season of one region, projected and sorted.

use serde::Serialize;

use crate::{
  Result,
  catalog::{Catalog, RaidType, Region},
  clock::ReferenceDay,
  projection::{self, TargetOutlook},
  season::{self, SeasonRecord},
};

/// The assembled schedule for one home region, newest start first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
  pub today:   ReferenceDay,
  pub home:    Region,
  pub target:  Region,
  pub seasons: Vec<SeasonRecord>,
}

impl Schedule {
  /// Normalize, project and sort every season of `home`.
  ///
  /// A season whose raid is missing from the catalog aborts the build. A
  /// season that merely cannot be projected is kept with an
  /// [`TargetOutlook::Unknown`] outlook.
  pub fn build(
    catalog: &Catalog,
    home: Region,
    target: Region,
    today: ReferenceDay,
  ) -> Result<Self> {
    let calendar = catalog.region(home);
    let mut seasons = Vec::new();

    for raid_type in RaidType::ALL {
      for raw in calendar.of(raid_type) {
        let mut record = season::normalize(raw, raid_type, catalog.raids(), today)?;
        record.target = projection::project(&record, catalog, home, target, today);
        seasons.push(record);
      }
    }

    // Stable: equal starts keep concatenation order.
    seasons.sort_by(|a, b| b.start.cmp(&a.start));

    let unknown = seasons
      .iter()
      .filter(|s| matches!(s.target, Some(TargetOutlook::Unknown(_))))
      .count();
    tracing::info!(
      %home,
      %target,
      seasons = seasons.len(),
      unprojected = unknown,
      "assembled schedule"
    );

    Ok(Self { today, home, target, seasons })
  }

  /// A schedule with no seasons, used when the catalog is unavailable.
  pub fn empty(home: Region, target: Region, today: ReferenceDay) -> Self {
    Self { today, home, target, seasons: Vec::new() }
  }

  pub fn is_empty(&self) -> bool { self.seasons.is_empty() }
}

/// Convenience wrapper over [`Schedule::build`] returning only the seasons.
pub fn build_schedule(
  catalog: &Catalog,
  home: Region,
  target: Region,
  today: ReferenceDay,
) -> Result<Vec<SeasonRecord>> {
  Schedule::build(catalog, home, target, today).map(|s| s.seasons)
}
