//! Layered configuration: defaults → TOML file → `RAIDCAL_*` env → flags.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use raidcal_core::catalog::Region;
use raidcal_feed::{DEFAULT_FEED_URL, FeedConfig};
use raidcal_html::{Assets, PageOptions, assets::DEFAULT_ASSET_BASE, parse_columns};
use serde::Deserialize;

use crate::Args;

/// Raw settings as read from every source.
#[derive(Debug, Deserialize)]
pub struct Settings {
  pub feed_url:       String,
  pub timeout_secs:   u64,
  pub home_region:    String,
  pub target_region:  String,
  pub asset_base_url: String,
  pub title:          String,
  #[serde(default)]
  pub columns:        Vec<String>,
  pub stylesheet:     Option<String>,
  pub output:         Option<PathBuf>,
}

/// Settings resolved into the types each crate expects.
#[derive(Debug, Clone)]
pub struct RunConfig {
  pub feed:   FeedConfig,
  pub home:   Region,
  pub target: Region,
  pub page:   PageOptions,
  pub output: Option<PathBuf>,
}

impl Settings {
  pub fn load(args: &Args) -> Result<Self> {
    let config = Config::builder()
      .set_default("feed_url", DEFAULT_FEED_URL)?
      .set_default("timeout_secs", 15_i64)?
      .set_default("home_region", "jp")?
      .set_default("target_region", "global")?
      .set_default("asset_base_url", DEFAULT_ASSET_BASE)?
      .set_default("title", "Raid Schedule")?
      .add_source(File::from(args.config.clone()).required(false))
      .add_source(
        Environment::with_prefix("RAIDCAL")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("columns"),
      )
      .set_override_option("feed_url", args.url.clone())?
      .set_override_option("timeout_secs", args.timeout.map(i64::from))?
      .set_override_option("home_region", args.home.clone())?
      .set_override_option("target_region", args.target.clone())?
      .set_override_option("asset_base_url", args.asset_base.clone())?
      .set_override_option("title", args.title.clone())?
      .set_override_option("columns", args.columns.clone())?
      .set_override_option("stylesheet", args.stylesheet.clone())?
      .set_override_option(
        "output",
        args.output.as_ref().map(|p| p.to_string_lossy().into_owned()),
      )?
      .build()
      .with_context(|| format!("failed to read config file {}", args.config.display()))?;

    config.try_deserialize().context("failed to deserialise settings")
  }

  pub fn resolve(self) -> Result<RunConfig> {
    let home: Region = self.home_region.parse().context("home_region")?;
    let target: Region = self.target_region.parse().context("target_region")?;

    Ok(RunConfig {
      feed: FeedConfig {
        url:     self.feed_url,
        timeout: Duration::from_secs(self.timeout_secs),
      },
      home,
      target,
      page: PageOptions {
        title:      self.title,
        columns:    parse_columns(&self.columns),
        assets:     Assets::new(self.asset_base_url),
        stylesheet: self.stylesheet,
      },
      output: self.output,
    })
  }
}
