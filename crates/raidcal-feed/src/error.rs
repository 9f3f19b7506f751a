//! Error type for `raidcal-feed`.
//!
//! Transport, status and timeout errors, and bodies that are not JSON at
//! all, are fetch failures. A JSON body of the wrong shape is a broken
//! catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("GET {url} failed: {source}")]
  Request {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  #[error("GET {url} → {status}")]
  Status { url: String, status: reqwest::StatusCode },

  #[error("decoding catalog: {0}")]
  Catalog(#[from] raidcal_core::Error),
}

impl Error {
  /// Whether no usable body arrived, as opposed to a catalog that arrived
  /// malformed.
  pub fn is_fetch_failure(&self) -> bool {
    match self {
      Error::Catalog(raidcal_core::Error::Json(e)) => !e.is_data(),
      Error::Catalog(_) => false,
      Error::Client(_) | Error::Request { .. } | Error::Status { .. } => true,
    }
  }

  /// Whether the request was aborted by the client timeout.
  pub fn is_timeout(&self) -> bool {
    match self {
      Error::Request { source, .. } => source.is_timeout(),
      _ => false,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
