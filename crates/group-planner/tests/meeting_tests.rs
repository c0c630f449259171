//! Tests for attendance counting and best-date search.

use chrono::{DateTime, TimeZone, Utc};
use group_planner::{
    available_members, best_meeting, create_group, find_meeting_date_with_maximum_members,
    find_meeting_members, find_meeting_members_raw, is_valid_meeting_date, parse_meeting_date,
    FreeRange, Group, MeetingCandidate, Person,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0).unwrap()
}

fn hiker(email: &str, start: u32, end: u32) -> Person {
    Person::new(
        email,
        ["hiking"],
        email,
        FreeRange::new(jan(start), jan(end)).unwrap(),
    )
}

fn group_of(people: Vec<Person>) -> Group {
    let mut group = create_group("hiking");
    for p in people {
        assert!(group.include_person(p));
    }
    group
}

// ── find_meeting_members ────────────────────────────────────────────────────

#[test]
fn hiking_scenario_counts() {
    let group = group_of(vec![hiker("a@x.com", 1, 10), hiker("b@x.com", 5, 15)]);

    assert_eq!(find_meeting_members(&group, jan(6)), 2);
    assert_eq!(find_meeting_members(&group, jan(2)), 1);
    assert_eq!(find_meeting_members(&group, jan(20)), 0);
}

#[test]
fn range_boundaries_are_inclusive() {
    let group = group_of(vec![hiker("a@x.com", 5, 10)]);

    assert_eq!(find_meeting_members(&group, jan(5)), 1);
    assert_eq!(find_meeting_members(&group, jan(10)), 1);
    assert_eq!(
        find_meeting_members(&group, Utc.with_ymd_and_hms(2026, 1, 4, 23, 59, 59).unwrap()),
        0
    );
    assert_eq!(
        find_meeting_members(&group, Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 1).unwrap()),
        0
    );
}

#[test]
fn empty_group_counts_zero() {
    let group = create_group("hiking");
    assert_eq!(find_meeting_members(&group, jan(1)), 0);
}

#[test]
fn plain_person_slice_is_a_roster() {
    let people = vec![hiker("a@x.com", 1, 10), hiker("b@x.com", 5, 15)];
    assert_eq!(find_meeting_members(people.as_slice(), jan(7)), 2);
    assert_eq!(find_meeting_members(&people, jan(12)), 1);
}

#[test]
fn available_members_lists_people_in_order() {
    let group = group_of(vec![
        hiker("a@x.com", 1, 10),
        hiker("b@x.com", 11, 15),
        hiker("c@x.com", 3, 8),
    ]);

    let emails: Vec<&str> = available_members(&group, jan(5))
        .into_iter()
        .map(|p| p.email.as_str())
        .collect();
    assert_eq!(emails, vec!["a@x.com", "c@x.com"]);
}

// ── Raw dates ───────────────────────────────────────────────────────────────

#[test]
fn missing_date_counts_zero() {
    let group = group_of(vec![hiker("a@x.com", 1, 10)]);
    assert_eq!(find_meeting_members_raw(&group, None), 0);
}

#[test]
fn unparseable_date_counts_zero() {
    let group = group_of(vec![hiker("a@x.com", 1, 10)]);
    assert_eq!(find_meeting_members_raw(&group, Some("not a date")), 0);
    assert_eq!(find_meeting_members_raw(&group, Some("")), 0);
    assert_eq!(find_meeting_members_raw(&group, Some("2026-02-30")), 0);
}

#[test]
fn raw_date_formats_are_accepted() {
    let group = group_of(vec![hiker("a@x.com", 1, 10)]);
    assert_eq!(find_meeting_members_raw(&group, Some("2026-01-05")), 1);
    assert_eq!(find_meeting_members_raw(&group, Some("2026-01-05T12:00:00")), 1);
    assert_eq!(find_meeting_members_raw(&group, Some("2026-01-05T12:00:00Z")), 1);
    assert_eq!(
        find_meeting_members_raw(&group, Some("2026-01-10T01:00:00+02:00")),
        1
    );
}

#[test]
fn offset_dates_are_normalized_to_utc() {
    let parsed = parse_meeting_date("2026-01-10T02:00:00+02:00").unwrap();
    assert_eq!(parsed, jan(10));
}

#[test]
fn validity_predicate() {
    assert!(is_valid_meeting_date("2026-01-01"));
    assert!(!is_valid_meeting_date("yesterday"));
}

// ── Best date ───────────────────────────────────────────────────────────────

#[test]
fn hiking_scenario_best_date() {
    let group = group_of(vec![hiker("a@x.com", 1, 10), hiker("b@x.com", 5, 15)]);

    assert_eq!(find_meeting_date_with_maximum_members(Some(&group)), Some(jan(5)));
    assert_eq!(
        best_meeting(&group),
        Some(MeetingCandidate {
            date: jan(5),
            attendees: 2
        })
    );
}

#[test]
fn empty_group_has_no_best_date() {
    let group = create_group("hiking");
    assert_eq!(find_meeting_date_with_maximum_members(Some(&group)), None);
    assert_eq!(best_meeting(&group), None);
}

#[test]
fn no_group_has_no_best_date() {
    assert_eq!(find_meeting_date_with_maximum_members::<Group>(None), None);
}

#[test]
fn single_member_best_date_is_their_start() {
    let group = group_of(vec![hiker("a@x.com", 3, 7)]);
    assert_eq!(find_meeting_date_with_maximum_members(Some(&group)), Some(jan(3)));
}

#[test]
fn tie_keeps_first_inserted_candidate() {
    // Disjoint ranges: every candidate gathers exactly one person.
    let group = group_of(vec![
        hiker("late@x.com", 20, 25),
        hiker("early@x.com", 1, 5),
    ]);
    assert_eq!(
        find_meeting_date_with_maximum_members(Some(&group)),
        Some(jan(20))
    );
}

#[test]
fn later_candidate_wins_only_with_more_attendees() {
    let group = group_of(vec![
        hiker("a@x.com", 1, 3),
        hiker("b@x.com", 10, 20),
        hiker("c@x.com", 12, 14),
        hiker("d@x.com", 2, 12),
    ]);
    // jan1 -> 1, jan10 -> 2, jan12 -> 3, jan2 -> 2
    assert_eq!(
        best_meeting(&group),
        Some(MeetingCandidate {
            date: jan(12),
            attendees: 3
        })
    );
}

#[test]
fn best_date_follows_exclusion() {
    let mut group = group_of(vec![
        hiker("a@x.com", 1, 10),
        hiker("b@x.com", 5, 15),
        hiker("c@x.com", 5, 6),
    ]);
    assert_eq!(best_meeting(&group).map(|c| c.attendees), Some(3));

    group.exclude_person("c@x.com");
    group.exclude_person("b@x.com");

    assert_eq!(find_meeting_date_with_maximum_members(Some(&group)), Some(jan(1)));
}
