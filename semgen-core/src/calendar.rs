//! Class-session date sequencing.
//!
//! The course meets on a fixed twice-a-week rhythm anchored to the
//! calendar week: a Monday or Tuesday meeting is followed two days
//! later by its Wednesday/Thursday partner, and any later weekday
//! jumps five days to the same starting weekday of the next week.
//! There is no configurable weekday list.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// One scheduled meeting of the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSession {
    /// 1-based ordinal among class sessions; dense, no gaps.
    pub index: usize,

    /// The calendar date of this meeting.
    pub date: NaiveDate,
}

/// Walk the course date range and return every class date in order.
///
/// `None` for either bound means the calendar was never configured
/// and yields an empty sequence; that is a valid state, not an error.
/// Dates in `excluded` are skipped without leaving a gap: every later
/// date shifts down one ordinal and nothing is substituted.
pub fn sequence(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    excluded: &BTreeSet<NaiveDate>,
) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };

    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        if excluded.contains(&current) {
            tracing::debug!(date = %current, "day off");
        } else {
            tracing::debug!(day = dates.len() + 1, date = %current, "class day");
            dates.push(current);
        }
        current = next_meeting(current);
    }
    dates
}

/// The next candidate meeting date per the weekly rhythm.
fn next_meeting(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Mon | Weekday::Tue => date + Duration::days(2),
        _ => date + Duration::days(5),
    }
}

/// Assign dense 1-based session ordinals to sequenced dates.
pub fn sessions(dates: &[NaiveDate]) -> Vec<ClassSession> {
    dates
        .iter()
        .enumerate()
        .map(|(i, &date)| ClassSession { index: i + 1, date })
        .collect()
}
