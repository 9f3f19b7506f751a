//! `raidcal`: render the raid schedule with cross-region date predictions.
//!
//! # Usage
//!
//! ```
//! raidcal --output raids.html
//! raidcal --home global --format json
//! raidcal --config ~/.config/raidcal.toml --today 2025-01-05
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the `info` default); the document
//! goes to `--output` or stdout.

mod settings;

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use raidcal_core::{
  capability::{RowSink, load_schedule, publish},
  clock::ReferenceDay,
  row::ScheduleRow,
  schedule::Schedule,
};
use raidcal_feed::FeedClient;
use raidcal_html::{CommunityResources, HtmlSink, PageOptions};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "raidcal", version, about = "Render the raid schedule with cross-region date predictions")]
struct Args {
  /// Path to a TOML config file. Missing files are ignored.
  #[arg(short, long, value_name = "FILE", default_value = "raidcal.toml")]
  config: PathBuf,

  /// Catalog feed URL.
  #[arg(long)]
  url: Option<String>,

  /// Fetch timeout in seconds.
  #[arg(long, value_name = "SECS")]
  timeout: Option<u32>,

  /// Region whose calendar is listed (`jp` or `global`).
  #[arg(long)]
  home: Option<String>,

  /// Region to project dates into (`jp` or `global`).
  #[arg(long)]
  target: Option<String>,

  /// Base URL for icons and raid pages.
  #[arg(long, value_name = "URL")]
  asset_base: Option<String>,

  /// Comma-separated column identifiers.
  #[arg(long, value_delimiter = ',')]
  columns: Option<Vec<String>>,

  /// Page title.
  #[arg(long)]
  title: Option<String>,

  /// Stylesheet href to link from the page.
  #[arg(long, value_name = "HREF")]
  stylesheet: Option<String>,

  /// Write the document here instead of stdout.
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Pin "today" (UTC) instead of reading the clock.
  #[arg(long, value_name = "YYYY-MM-DD")]
  today: Option<NaiveDate>,

  #[arg(long, value_enum, default_value_t = Format::Html)]
  format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  Html,
  Json,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let run = Settings::load(&args)?.resolve()?;

  // Captured once; every offset in this run is relative to it.
  let today = args.today.map(ReferenceDay::new).unwrap_or_else(ReferenceDay::today);

  let feed = FeedClient::new(run.feed.clone()).context("building feed client")?;
  let schedule = load_schedule(&feed, run.home, run.target, today)
    .await
    .context("building schedule")?;

  let rows = match &run.output {
    Some(path) => {
      let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
      emit(BufWriter::new(file), args.format, &schedule, run.page)?
    }
    None => emit(io::stdout().lock(), args.format, &schedule, run.page)?,
  };

  tracing::info!(rows, home = %run.home, target = %run.target, date = %today.date(), "done");
  Ok(())
}

fn emit<W: Write>(writer: W, format: Format, schedule: &Schedule, page: PageOptions) -> Result<usize> {
  match format {
    Format::Html => {
      let mut sink = HtmlSink::new(writer, page);
      publish(schedule, &CommunityResources, &mut sink).context("rendering HTML")
    }
    Format::Json => {
      let mut sink = JsonSink(writer);
      publish(schedule, &CommunityResources, &mut sink).context("rendering JSON")
    }
  }
}

// ─── JSON sink ────────────────────────────────────────────────────────────────

/// Writes the rows as a pretty-printed JSON array.
struct JsonSink<W: Write>(W);

impl<W: Write> RowSink for JsonSink<W> {
  type Error = serde_json::Error;

  fn render_rows(&mut self, _schedule: &Schedule, rows: &[ScheduleRow]) -> Result<(), Self::Error> {
    serde_json::to_writer_pretty(&mut self.0, rows)?;
    self.0.write_all(b"\n").map_err(serde_json::Error::io)?;
    self.0.flush().map_err(serde_json::Error::io)
  }
}
