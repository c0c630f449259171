//! # group-planner
//!
//! Small in-memory interest groups and meeting-date search.
//!
//! A [`Group`] holds people who share one interest tag. Each person carries an
//! inclusive free range; the meeting queries count who is free on a date and
//! pick the member start date that gathers the most people.
//!
//! ## Modules
//!
//! - [`person`] — `Person` records and their `FreeRange`
//! - [`group`] — The group registry and the `Roster` capability
//! - [`meeting`] — Attendance counting and best-date search
//! - [`error`] — Error types

pub mod error;
pub mod group;
pub mod meeting;
pub mod person;

pub use error::{PlannerError, Result};
pub use group::{create_group, Group, Roster};
pub use meeting::{
    available_members, best_meeting, best_meeting_date, find_meeting_date_with_maximum_members,
    find_meeting_members, find_meeting_members_raw, is_valid_meeting_date, parse_meeting_date,
    MeetingCandidate,
};
pub use person::{FreeRange, Person};
