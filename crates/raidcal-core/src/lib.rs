//! Core types and schedule computation for the raid calendar.
//!
//! This crate is deliberately free of HTTP and HTML dependencies. Fetching
//! the catalog and rendering rows are injected through the traits in
//! [`capability`].

pub mod capability;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod projection;
pub mod row;
pub mod schedule;
pub mod season;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
