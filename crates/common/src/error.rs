//! Errors raised by the date helpers.

use chrono::NaiveDateTime;

/// Invalid input passed to a date helper.
///
/// These are caller errors; nothing in this crate retries or recovers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Precision name outside `year`..`second`
    #[error("Invalid precision: {0}")]
    InvalidPrecision(String),

    /// Text that does not describe a calendar instant
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Truncation landed in a wall-clock gap (e.g. a DST transition)
    #[error("Local time {0} does not exist in the date's time zone")]
    NonexistentLocalTime(NaiveDateTime),
}
