//! Capabilities the core calls out to, and the run that wires them together.
//!
//! Fetching the catalog and rendering rows are implemented elsewhere
//! (`raidcal-feed`, `raidcal-html`). The core depends on these traits only.

use std::future::Future;

use thiserror::Error;

use crate::{
  Result,
  catalog::{Catalog, Region},
  clock::ReferenceDay,
  row::{self, ResourceLink, ScheduleRow},
  schedule::Schedule,
  season::SeasonRecord,
};

// ─── Traits ──────────────────────────────────────────────────────────────────

/// Retrieves the raid catalog. One request per call, no retries.
pub trait CatalogSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn fetch_catalog(&self) -> impl Future<Output = Result<Catalog, Self::Error>> + Send + '_;

  /// Whether `error` means no catalog arrived (transport, status, timeout).
  /// Any other error is a broken catalog and fails the build.
  fn is_fetch_failure(error: &Self::Error) -> bool;
}

/// Builds the external resource links shown beside each season.
pub trait ResourceLinks {
  fn links_for(&self, season: &SeasonRecord) -> Vec<ResourceLink>;
}

/// No links at all.
impl ResourceLinks for () {
  fn links_for(&self, _season: &SeasonRecord) -> Vec<ResourceLink> { Vec::new() }
}

/// Accepts the computed rows for display.
pub trait RowSink {
  type Error: std::error::Error + Send + Sync + 'static;

  fn render_rows(&mut self, schedule: &Schedule, rows: &[ScheduleRow]) -> Result<(), Self::Error>;
}

// ─── Run ─────────────────────────────────────────────────────────────────────

/// Why [`load_schedule`] produced no schedule.
#[derive(Debug, Error)]
pub enum LoadError<E> {
  /// The source delivered a structurally broken catalog.
  #[error("catalog rejected: {0}")]
  Source(#[source] E),

  #[error(transparent)]
  Build(#[from] crate::Error),
}

/// Fetch the catalog and build the schedule for `home`.
///
/// A fetch failure degrades to an empty schedule. A malformed catalog or a
/// catalog inconsistency (e.g. a season naming an unknown raid) is returned
/// as an error.
pub async fn load_schedule<S>(
  source: &S,
  home: Region,
  target: Region,
  today: ReferenceDay,
) -> Result<Schedule, LoadError<S::Error>>
where
  S: CatalogSource + ?Sized,
{
  match source.fetch_catalog().await {
    Ok(catalog) => Ok(Schedule::build(&catalog, home, target, today)?),
    Err(e) if S::is_fetch_failure(&e) => {
      tracing::error!(error = %e, "catalog unavailable; rendering an empty schedule");
      Ok(Schedule::empty(home, target, today))
    }
    Err(e) => Err(LoadError::Source(e)),
  }
}

/// Map `schedule` to rows and hand them to `sink`. Returns the row count.
pub fn publish<L, K>(schedule: &Schedule, links: &L, sink: &mut K) -> Result<usize, K::Error>
where
  L: ResourceLinks + ?Sized,
  K: RowSink + ?Sized,
{
  let rows = row::map_rows(schedule, links);
  sink.render_rows(schedule, &rows)?;
  Ok(rows.len())
}
