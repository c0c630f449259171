//! Meeting queries over a [`Roster`].
//!
//! Attendance for a date is the number of members whose free range contains
//! it. The best-date search only tries members' own range starts as
//! candidates, so it never invents a date nobody proposed.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::group::Roster;
use crate::person::Person;

/// The winning candidate of a best-date search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingCandidate {
    pub date: DateTime<Utc>,
    pub attendees: usize,
}

/// Parse a meeting date from text.
///
/// Accepts RFC 3339 (`2026-01-05T10:00:00+02:00`), a naive datetime
/// (`2026-01-05T10:00:00`, read as UTC) and a bare date (`2026-01-05`,
/// midnight UTC).
///
/// # Errors
/// Returns `PlannerError::InvalidDate` if none of the formats match.
pub fn parse_meeting_date(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| PlannerError::InvalidDate(format!("'{s}': {e}")))
}

/// True when `s` parses as a meeting date.
pub fn is_valid_meeting_date(s: &str) -> bool {
    parse_meeting_date(s).is_ok()
}

/// Members free on `meeting_date`, in insertion order.
pub fn available_members<R>(group: &R, meeting_date: DateTime<Utc>) -> Vec<&Person>
where
    R: Roster + ?Sized,
{
    group
        .get_all()
        .iter()
        .filter(|p| p.is_free_on(meeting_date))
        .collect()
}

/// Count members whose free range contains `meeting_date` (both ends
/// inclusive).
pub fn find_meeting_members<R>(group: &R, meeting_date: DateTime<Utc>) -> usize
where
    R: Roster + ?Sized,
{
    group
        .get_all()
        .iter()
        .filter(|p| p.is_free_on(meeting_date))
        .count()
}

/// Like [`find_meeting_members`], for a date that may be missing or not a
/// date at all. Either case counts as nobody attending.
pub fn find_meeting_members_raw<R>(group: &R, meeting_date: Option<&str>) -> usize
where
    R: Roster + ?Sized,
{
    let Some(raw) = meeting_date else {
        return 0;
    };
    match parse_meeting_date(raw) {
        Ok(date) => find_meeting_members(group, date),
        Err(e) => {
            tracing::debug!(error = %e, "meeting date rejected");
            0
        }
    }
}

/// Try every member's range start as a meeting date and keep the one with the
/// most attendees.
///
/// Candidates are visited in insertion order and only a strictly larger count
/// replaces the current best, so the earliest-inserted candidate wins a tie.
/// Returns `None` for an empty roster.
pub fn best_meeting<R>(group: &R) -> Option<MeetingCandidate>
where
    R: Roster + ?Sized,
{
    let mut best: Option<MeetingCandidate> = None;
    let mut max_attendees = 0;

    for person in group.get_all() {
        let date = person.free_range.start_date();
        let attendees = find_meeting_members(group, date);
        tracing::trace!(%date, attendees, "meeting candidate");
        if attendees > max_attendees {
            max_attendees = attendees;
            best = Some(MeetingCandidate { date, attendees });
        }
    }

    if let Some(winner) = &best {
        tracing::debug!(date = %winner.date, attendees = winner.attendees, "best meeting date");
    }
    best
}

/// The date of [`best_meeting`].
pub fn best_meeting_date<R>(group: &R) -> Option<DateTime<Utc>>
where
    R: Roster + ?Sized,
{
    best_meeting(group).map(|c| c.date)
}

/// Best meeting date for an optional group. No group means no date.
pub fn find_meeting_date_with_maximum_members<R>(group: Option<&R>) -> Option<DateTime<Utc>>
where
    R: Roster + ?Sized,
{
    group.and_then(|g| best_meeting_date(g))
}
