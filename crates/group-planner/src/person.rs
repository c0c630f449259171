//! People and their availability windows.
//!
//! A [`Person`] is built by the caller and handed to a group by value. The
//! group only reads it back, so every field is public and plain data.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Inclusive availability window. `start_date <= end_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFreeRange", rename_all = "camelCase")]
pub struct FreeRange {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFreeRange {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl TryFrom<RawFreeRange> for FreeRange {
    type Error = PlannerError;

    fn try_from(raw: RawFreeRange) -> Result<Self> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl FreeRange {
    /// Build a range, rejecting one whose start lies after its end.
    ///
    /// A zero-length range (`start == end`) is valid: the person is free at
    /// exactly that instant.
    ///
    /// # Errors
    /// Returns `PlannerError::InvertedRange` if `start_date > end_date`.
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Result<Self> {
        if start_date > end_date {
            return Err(PlannerError::InvertedRange {
                start: start_date.to_rfc3339(),
                end: end_date.to_rfc3339(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// True when `instant` falls inside the range, boundaries included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_date <= instant && instant <= self.end_date
    }
}

/// A potential group member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    /// Interest tags. Missing in JSON means "no interests".
    #[serde(default)]
    pub interests: BTreeSet<String>,
    /// Identifies the person inside a group. Compared byte for byte.
    pub email: String,
    pub free_range: FreeRange,
}

impl Person {
    pub fn new<I, S>(
        name: impl Into<String>,
        interests: I,
        email: impl Into<String>,
        free_range: FreeRange,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            interests: interests.into_iter().map(Into::into).collect(),
            email: email.into(),
            free_range,
        }
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.contains(interest)
    }

    pub fn is_free_on(&self, instant: DateTime<Utc>) -> bool {
        self.free_range.contains(instant)
    }
}
