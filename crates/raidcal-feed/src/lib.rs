//! HTTP retrieval of the raid catalog.
//!
//! Implements [`raidcal_core::capability::CatalogSource`] with a single
//! bounded-timeout GET. No retries.

mod client;

pub mod error;

pub use client::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT, FeedClient, FeedConfig};
pub use error::{Error, Result};
