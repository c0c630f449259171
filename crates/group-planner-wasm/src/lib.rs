//! WASM bindings for group-planner.
//!
//! Exposes group creation, membership and the two meeting queries to
//! JavaScript via `wasm-bindgen`. People cross the boundary as JSON strings
//! and dates as ISO 8601 strings.
//!
//! Nothing here throws on bad input: a malformed person is refused
//! (`false`), and a missing or unparseable meeting date counts zero
//! attendees.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p group-planner-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/group-planner-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/group_planner_wasm.wasm
//! ```

use chrono::{DateTime, Utc};
use group_planner::{FreeRange, Person};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FreeRangeDto {
    start_date: String,
    end_date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonDto<'a> {
    name: &'a str,
    interests: Vec<&'a str>,
    email: &'a str,
    free_range: FreeRangeDto,
}

impl<'a> From<&'a Person> for PersonDto<'a> {
    fn from(p: &'a Person) -> Self {
        Self {
            name: &p.name,
            interests: p.interests.iter().map(String::as_str).collect(),
            email: &p.email,
            free_range: FreeRangeDto {
                start_date: p.free_range.start_date().to_rfc3339(),
                end_date: p.free_range.end_date().to_rfc3339(),
            },
        }
    }
}

/// Input format for people passed from JavaScript.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonInput {
    #[serde(default)]
    name: String,
    /// Absent interests are treated as an empty list.
    #[serde(default)]
    interests: Vec<String>,
    email: String,
    free_range: FreeRangeInput,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FreeRangeInput {
    start_date: String,
    end_date: String,
}

/// Decode a person JSON object. Dates accept the same formats as
/// `findMeetingMembers`.
fn parse_person_json(json: &str) -> group_planner::Result<Person> {
    let input: PersonInput = serde_json::from_str(json)?;
    let start = group_planner::parse_meeting_date(&input.free_range.start_date)?;
    let end = group_planner::parse_meeting_date(&input.free_range.end_date)?;
    Ok(Person::new(
        input.name,
        input.interests,
        input.email,
        FreeRange::new(start, end)?,
    ))
}

fn to_js_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// A group of people sharing one interest.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Group {
    inner: group_planner::Group,
}

#[wasm_bindgen]
impl Group {
    #[wasm_bindgen(constructor)]
    pub fn new(interest: &str) -> Group {
        Group {
            inner: group_planner::Group::new(interest),
        }
    }

    pub fn interest(&self) -> String {
        self.inner.interest().to_string()
    }

    /// Current members as a JSON array, in insertion order.
    #[wasm_bindgen(js_name = "getAll")]
    pub fn get_all(&self) -> Result<String, JsValue> {
        let dtos: Vec<PersonDto<'_>> = self.inner.get_all().iter().map(PersonDto::from).collect();
        serde_json::to_string(&dtos)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Add a person given as a JSON object. Returns `false` when the JSON is
    /// malformed, the interest is missing or the email is already taken.
    #[wasm_bindgen(js_name = "includePerson")]
    pub fn include_person(&mut self, person_json: &str) -> bool {
        match parse_person_json(person_json) {
            Ok(person) => self.inner.include_person(person),
            Err(e) => {
                tracing::debug!(error = %e, "refused malformed person");
                false
            }
        }
    }

    /// Remove the member with `email`. Returns whether anyone was removed.
    #[wasm_bindgen(js_name = "excludePerson")]
    pub fn exclude_person(&mut self, email: &str) -> bool {
        self.inner.exclude_person(email)
    }
}

/// Create an empty group for `interest`.
#[wasm_bindgen(js_name = "createGroup")]
pub fn create_group(interest: &str) -> Group {
    Group::new(interest)
}

/// Count members free on `meeting_date`.
///
/// `meeting_date` is an ISO 8601 string. `undefined` or an unparseable value
/// yields 0.
#[wasm_bindgen(js_name = "findMeetingMembers")]
pub fn find_meeting_members(group: &Group, meeting_date: Option<String>) -> u32 {
    let count = group_planner::find_meeting_members_raw(&group.inner, meeting_date.as_deref());
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// The member start date that gathers the most people, as an RFC 3339
/// string, or `undefined` for an empty group.
#[wasm_bindgen(js_name = "findMeetingDateWithMaximumMembers")]
pub fn find_meeting_date_with_maximum_members(group: &Group) -> Option<String> {
    group_planner::find_meeting_date_with_maximum_members(Some(&group.inner)).map(to_js_date)
}
