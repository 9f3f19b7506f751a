//! Error types for the HTML sink.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("writing document: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
