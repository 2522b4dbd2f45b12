//! Daily study streak rule.
//!
//! Streaks count consecutive calendar days with at least one logged session.
//! Days are compared as dates in a caller-chosen UTC offset; time of day is
//! ignored.

use chrono::{DateTime, FixedOffset, Utc};

/// Whole calendar days from `earlier` to `later`, as seen in `offset`.
///
/// Negative when `later` falls on an earlier date.
#[must_use]
pub fn calendar_days_between(
    earlier: DateTime<Utc>,
    later: DateTime<Utc>,
    offset: FixedOffset,
) -> i64 {
    let from = earlier.with_timezone(&offset).date_naive();
    let to = later.with_timezone(&offset).date_naive();
    to.signed_duration_since(from).num_days()
}

/// Streak value after studying at `now`.
///
/// - no previous session: 1
/// - same calendar day: unchanged
/// - previous calendar day: +1
/// - anything else (a gap, or a last session dated in the future): 1
#[must_use]
pub fn next_streak(
    current: u32,
    last_study: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> u32 {
    let Some(last) = last_study else {
        return 1;
    };
    match calendar_days_between(last, now, offset) {
        0 => current,
        1 => current.saturating_add(1),
        _ => 1,
    }
}
