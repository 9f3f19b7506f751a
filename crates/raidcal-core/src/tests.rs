//! End-to-end schedule tests against an in-memory catalog.

use std::convert::Infallible;

use chrono::NaiveDate;

use crate::{
  Error,
  capability::{CatalogSource, LoadError, RowSink, load_schedule, publish},
  catalog::{Catalog, RaidDefinition, RaidId, RaidType, RawSeason, Region, RegionSeasons, SeasonId},
  clock::{ReferenceDay, SECONDS_PER_DAY},
  projection::{GlobalProjection, ProjectionError, ProjectionStatus, TargetOutlook},
  row::{ScheduleRow, TargetCell},
  schedule::{Schedule, build_schedule},
  season::SeasonRecord,
};

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn today() -> ReferenceDay { ReferenceDay::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()) }

/// Epoch seconds `days` after the reference day, mid-afternoon UTC.
fn at(days: i64) -> i64 {
  let midnight = today().date().and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
  midnight + days * SECONDS_PER_DAY + 15 * 3600
}

fn raid(id: RaidId, name: &str) -> RaidDefinition {
  RaidDefinition {
    id,
    name: name.into(),
    path_name: name.to_lowercase(),
    terrain: vec!["Outdoor".into()],
    dev_name: name.into(),
    portrait: None,
  }
}

fn season(season_id: SeasonId, start_day: i64, raid_id: RaidId) -> RawSeason {
  RawSeason {
    season_id,
    season_display: season_id.to_string(),
    terrain: "Outdoor".into(),
    start: at(start_day),
    end: at(start_day + 7),
    raid_id,
  }
}

/// Japan leads Global by roughly 110 days on Total Assault; Global has not
/// announced any Grand Assault yet.
fn catalog() -> Catalog {
  let japan = RegionSeasons {
    total_assault: vec![season(95, -90, 1), season(100, -50, 2), season(105, 100, 3)],
    grand_assault: vec![season(10, -40, 1), season(11, 100, 2)],
  };
  let global = RegionSeasons {
    total_assault: vec![season(90, -20, 1), season(95, 60, 2)],
    grand_assault: vec![],
  };
  Catalog::new([raid(1, "Binah"), raid(2, "Hieronymus"), raid(3, "Kaiten")], japan, global)
}

fn find(seasons: &[SeasonRecord], raid_type: RaidType, id: SeasonId) -> &SeasonRecord {
  seasons
    .iter()
    .find(|s| s.raid_type == raid_type && s.season_id == id)
    .expect("season present")
}

// ─── Assembly ────────────────────────────────────────────────────────────────

#[test]
fn schedule_is_sorted_newest_first() {
  let seasons = build_schedule(&catalog(), Region::Japan, Region::Global, today()).unwrap();

  assert_eq!(seasons.len(), 5);
  assert!(seasons.windows(2).all(|w| w[0].start >= w[1].start));
}

#[test]
fn equal_starts_keep_total_assault_first() {
  let seasons = build_schedule(&catalog(), Region::Japan, Region::Global, today()).unwrap();

  let order: Vec<_> = seasons.iter().map(|s| (s.raid_type, s.season_id)).collect();
  assert_eq!(order, vec![
    (RaidType::TotalAssault, 105),
    (RaidType::GrandAssault, 11),
    (RaidType::GrandAssault, 10),
    (RaidType::TotalAssault, 100),
    (RaidType::TotalAssault, 95),
  ]);
}

#[test]
fn days_until_counts_calendar_days() {
  let seasons = build_schedule(&catalog(), Region::Japan, Region::Global, today()).unwrap();

  assert_eq!(find(&seasons, RaidType::TotalAssault, 105).days_until, 100);
  assert_eq!(find(&seasons, RaidType::GrandAssault, 10).days_until, -40);
  assert_eq!(find(&seasons, RaidType::TotalAssault, 95).days_until, -90);
}

#[test]
fn confirmed_and_predicted_projections() {
  let seasons = build_schedule(&catalog(), Region::Japan, Region::Global, today()).unwrap();

  let confirmed = find(&seasons, RaidType::TotalAssault, 100);
  assert_eq!(
    confirmed.target,
    Some(TargetOutlook::Projected(GlobalProjection {
      days_until_target: 60,
      status:            ProjectionStatus::Confirmed,
    }))
  );

  // Anchor is Global 95 (day 60), whose Japan equivalent is 100 (day -50).
  let predicted = find(&seasons, RaidType::TotalAssault, 105);
  assert_eq!(
    predicted.target,
    Some(TargetOutlook::Projected(GlobalProjection {
      days_until_target: 60 + 100 + 50,
      status:            ProjectionStatus::Predicted,
    }))
  );
}

#[test]
fn unprojectable_rows_are_kept() {
  let seasons = build_schedule(&catalog(), Region::Japan, Region::Global, today()).unwrap();

  for id in [10, 11] {
    assert_eq!(
      find(&seasons, RaidType::GrandAssault, id).target,
      Some(TargetOutlook::Unknown(ProjectionError::NoAnchorEquivalent {
        raid_type: RaidType::GrandAssault,
        anchor:    None,
      }))
    );
  }
  assert!(matches!(
    find(&seasons, RaidType::TotalAssault, 95).target,
    Some(TargetOutlook::Projected(_))
  ));
}

#[test]
fn global_home_projects_back_into_japan() {
  let seasons = build_schedule(&catalog(), Region::Global, Region::Japan, today()).unwrap();

  let confirmed = |days| {
    Some(TargetOutlook::Projected(GlobalProjection {
      days_until_target: days,
      status:            ProjectionStatus::Confirmed,
    }))
  };
  // Global 95 is Japan 100; Global 90 is Japan 95.
  assert_eq!(find(&seasons, RaidType::TotalAssault, 95).target, confirmed(-50));
  assert_eq!(find(&seasons, RaidType::TotalAssault, 90).target, confirmed(-90));
}

#[test]
fn same_region_has_no_projection() {
  let seasons = build_schedule(&catalog(), Region::Global, Region::Global, today()).unwrap();

  assert_eq!(seasons.len(), 2);
  assert!(seasons.iter().all(|s| s.target.is_none()));
}

#[test]
fn missing_raid_aborts_the_build() {
  let base = catalog();
  let mut japan = base.region(Region::Japan).clone();
  japan.grand_assault.push(season(12, 130, 404));
  let catalog = Catalog::new(
    base.raids().values().cloned(),
    japan,
    base.region(Region::Global).clone(),
  );

  let err = build_schedule(&catalog, Region::Japan, Region::Global, today()).unwrap_err();
  assert!(matches!(
    err,
    Error::MissingRaidDefinition { raid_id: 404, season_id: 12 }
  ));
}

#[test]
fn rebuilding_is_byte_identical() {
  let catalog = catalog();
  let a = Schedule::build(&catalog, Region::Japan, Region::Global, today()).unwrap();
  let b = Schedule::build(&catalog, Region::Japan, Region::Global, today()).unwrap();

  assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

// ─── Capabilities ────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
enum SourceError {
  #[error("feed offline")]
  Offline,
  #[error("catalog has one region")]
  Malformed,
}

struct FixedSource(Result<Catalog, fn() -> SourceError>);

impl FixedSource {
  fn ok(catalog: Catalog) -> Self { Self(Ok(catalog)) }

  fn failing(error: fn() -> SourceError) -> Self { Self(Err(error)) }
}

impl CatalogSource for FixedSource {
  type Error = SourceError;

  async fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
    self.0.clone().map_err(|error| error())
  }

  fn is_fetch_failure(error: &SourceError) -> bool { matches!(error, SourceError::Offline) }
}

#[derive(Default)]
struct Recorder {
  rows: Vec<ScheduleRow>,
}

impl RowSink for Recorder {
  type Error = Infallible;

  fn render_rows(&mut self, _schedule: &Schedule, rows: &[ScheduleRow]) -> Result<(), Infallible> {
    self.rows = rows.to_vec();
    Ok(())
  }
}

#[tokio::test]
async fn fetch_failure_degrades_to_empty_schedule() {
  let source = FixedSource::failing(|| SourceError::Offline);

  let schedule = load_schedule(&source, Region::Japan, Region::Global, today()).await.unwrap();

  assert!(schedule.is_empty());
  assert_eq!(schedule.home, Region::Japan);
}

#[tokio::test]
async fn broken_catalog_from_source_fails_the_build() {
  let source = FixedSource::failing(|| SourceError::Malformed);

  let result = load_schedule(&source, Region::Japan, Region::Global, today()).await;

  assert!(matches!(result, Err(LoadError::Source(SourceError::Malformed))));
}

#[tokio::test]
async fn malformed_catalog_is_not_swallowed() {
  let broken = Catalog::new(
    Vec::<RaidDefinition>::new(),
    catalog().region(Region::Japan).clone(),
    RegionSeasons::default(),
  );
  let result = load_schedule(&FixedSource::ok(broken), Region::Japan, Region::Global, today()).await;

  assert!(matches!(result, Err(LoadError::Build(Error::MissingRaidDefinition { .. }))));
}

#[tokio::test]
async fn published_rows_follow_schedule_order() {
  let schedule = load_schedule(&FixedSource::ok(catalog()), Region::Japan, Region::Global, today())
    .await
    .unwrap();

  let mut sink = Recorder::default();
  let count = publish(&schedule, &(), &mut sink).unwrap();

  assert_eq!(count, 5);
  assert_eq!(sink.rows[0].season_id, 105);
  assert_eq!(sink.rows[0].target, TargetCell::Scheduled {
    days:   210,
    date:   "September 27, 2025".into(),
    status: ProjectionStatus::Predicted,
  });
  assert_eq!(sink.rows[1].target, TargetCell::Unknown);
  assert!(sink.rows.iter().all(|r| r.resources.is_empty()));
}
