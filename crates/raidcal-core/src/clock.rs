//! Day-granularity clock.
//!
//! All schedule arithmetic happens in whole UTC days. "Today" is captured once
//! per build as a [`ReferenceDay`] and threaded through every call, so a build
//! that straddles midnight still produces mutually consistent offsets.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Long-form date style, e.g. "January 5, 2025".
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Midnight UTC of the day a schedule build runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReferenceDay(NaiveDate);

impl ReferenceDay {
  pub fn new(date: NaiveDate) -> Self { Self(date) }

  /// Read the wall clock. Only the binary should call this.
  pub fn today() -> Self { Self(Utc::now().date_naive()) }

  pub fn date(&self) -> NaiveDate { self.0 }

  /// Signed whole days from this reference day to the UTC day containing
  /// `epoch_seconds`. Negative for past days.
  pub fn day_offset(&self, epoch_seconds: i64) -> i64 {
    epoch_day(epoch_seconds) - self.epoch_day()
  }

  /// The calendar date `days` after (or before, if negative) this one.
  pub fn shifted(&self, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
      self.0.checked_add_days(magnitude)
    } else {
      self.0.checked_sub_days(magnitude)
    }
  }

  fn epoch_day(&self) -> i64 {
    (self.0 - DateTime::<Utc>::UNIX_EPOCH.date_naive()).num_days()
  }
}

/// Number of whole days between the epoch and the UTC day of `epoch_seconds`.
pub fn epoch_day(epoch_seconds: i64) -> i64 { epoch_seconds.div_euclid(SECONDS_PER_DAY) }

/// Format a calendar date in the long-form style.
pub fn format_long(date: NaiveDate) -> String { date.format(LONG_DATE_FORMAT).to_string() }

/// Format the UTC day of `epoch_seconds` in the long-form style.
///
/// Timestamps outside chrono's representable range yield `None`.
pub fn format_timestamp(epoch_seconds: i64) -> Option<String> {
  DateTime::from_timestamp(epoch_seconds, 0).map(|dt| format_long(dt.date_naive()))
}
