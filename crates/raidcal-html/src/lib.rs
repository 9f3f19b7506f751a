//! HTML rendering for the raid schedule.
//!
//! Implements [`raidcal_core::capability::RowSink`] by writing a static page
//! with a single `#raids-table`. Also supplies the community
//! [`ResourceLinks`](raidcal_core::capability::ResourceLinks) used for the
//! resources column.
//!
//! # Quick start
//!
//! ```no_run
//! use raidcal_core::capability::publish;
//! use raidcal_html::{CommunityResources, HtmlSink, PageOptions};
//! # fn demo(schedule: &raidcal_core::schedule::Schedule) -> raidcal_html::Result<()> {
//! let mut sink = HtmlSink::new(std::io::stdout(), PageOptions::default());
//! publish(schedule, &CommunityResources, &mut sink)?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
mod column;
pub mod error;
mod resources;
mod table;

use std::io::Write;

pub use assets::Assets;
pub use column::{Column, UnknownColumn, parse_columns};
pub use error::{Error, Result};
use raidcal_core::{
  capability::RowSink,
  row::{ScheduleRow, next_focus},
  schedule::Schedule,
};
pub use resources::CommunityResources;

// ─── Options ─────────────────────────────────────────────────────────────────

/// Page-level rendering options.
#[derive(Debug, Clone)]
pub struct PageOptions {
  pub title:      String,
  pub columns:    Vec<Column>,
  pub assets:     Assets,
  /// Optional stylesheet `href`.
  pub stylesheet: Option<String>,
}

impl Default for PageOptions {
  fn default() -> Self {
    Self {
      title:      "Raid Schedule".into(),
      columns:    Column::DEFAULT.to_vec(),
      assets:     Assets::default(),
      stylesheet: None,
    }
  }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render the full document to a string.
pub fn render_page(schedule: &Schedule, rows: &[ScheduleRow], options: &PageOptions) -> String {
  table::page(schedule, rows, next_focus(rows), options).into_string()
}

/// Writes the rendered page into `W`.
pub struct HtmlSink<W: Write> {
  writer:  W,
  options: PageOptions,
}

impl<W: Write> HtmlSink<W> {
  pub fn new(writer: W, options: PageOptions) -> Self { Self { writer, options } }

  pub fn into_inner(self) -> W { self.writer }
}

impl<W: Write> RowSink for HtmlSink<W> {
  type Error = Error;

  fn render_rows(&mut self, schedule: &Schedule, rows: &[ScheduleRow]) -> Result<()> {
    let html = render_page(schedule, rows, &self.options);
    self.writer.write_all(html.as_bytes())?;
    self.writer.flush()?;
    tracing::debug!(rows = rows.len(), bytes = html.len(), "rendered schedule page");
    Ok(())
  }
}
