//! Async HTTP client for the raid catalog feed.

use std::time::Duration;

use raidcal_core::{capability::CatalogSource, catalog::Catalog};
use reqwest::Client;

use crate::{Error, Result};

pub const DEFAULT_FEED_URL: &str = "https://schaledb.com/data/en/raids.min.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the catalog feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
  pub url:     String,
  /// Upper bound on the whole request, body included.
  pub timeout: Duration,
}

impl Default for FeedConfig {
  fn default() -> Self {
    Self { url: DEFAULT_FEED_URL.to_string(), timeout: DEFAULT_TIMEOUT }
  }
}

/// Fetches the catalog over HTTP.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct FeedClient {
  client: Client,
  config: FeedConfig,
}

impl FeedClient {
  pub fn new(config: FeedConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(Error::Client)?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &FeedConfig { &self.config }

  /// `GET <url>` and decode the body as a [`Catalog`].
  pub async fn fetch(&self) -> Result<Catalog> {
    let url = &self.config.url;
    tracing::debug!(%url, timeout = ?self.config.timeout, "fetching catalog");

    let request_failed = |source: reqwest::Error| Error::Request { url: url.clone(), source };

    let resp = self.client.get(url).send().await.map_err(request_failed)?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status { url: url.clone(), status });
    }

    let body = resp.text().await.map_err(request_failed)?;
    let catalog = Catalog::from_json(&body)?;

    tracing::info!(%url, bytes = body.len(), raids = catalog.raids().len(), "catalog fetched");
    Ok(catalog)
  }
}

impl CatalogSource for FeedClient {
  type Error = Error;

  async fn fetch_catalog(&self) -> Result<Catalog> { self.fetch().await }

  fn is_fetch_failure(error: &Error) -> bool { error.is_fetch_failure() }
}
