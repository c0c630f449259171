//! The group registry: one interest tag and the people who share it.
//!
//! Membership changes only through [`Group::include_person`] and
//! [`Group::exclude_person`], which keep two invariants:
//!
//! - every member's interests contain the group's tag;
//! - no two members share an email.
//!
//! Members keep their insertion order.

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Anything that can list its members for the meeting queries.
pub trait Roster {
    /// Current members, in insertion order.
    fn get_all(&self) -> &[Person];
}

impl Roster for [Person] {
    fn get_all(&self) -> &[Person] {
        self
    }
}

impl Roster for Vec<Person> {
    fn get_all(&self) -> &[Person] {
        self
    }
}

/// A group of people sharing one interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupSnapshot")]
pub struct Group {
    interest: String,
    members: Vec<Person>,
}

/// Wire shape of a group. Rebuilt through `include_person` on load so that
/// the invariants hold regardless of what the snapshot contains.
#[derive(Deserialize)]
struct GroupSnapshot {
    interest: String,
    #[serde(default)]
    members: Vec<Person>,
}

impl From<GroupSnapshot> for Group {
    fn from(snapshot: GroupSnapshot) -> Self {
        let mut group = Self::new(snapshot.interest);
        for person in snapshot.members {
            group.include_person(person);
        }
        group
    }
}

/// Create an empty group for `interest`.
pub fn create_group(interest: impl Into<String>) -> Group {
    Group::new(interest)
}

impl Group {
    pub fn new(interest: impl Into<String>) -> Self {
        Self {
            interest: interest.into(),
            members: Vec::new(),
        }
    }

    /// The tag fixed at creation.
    pub fn interest(&self) -> &str {
        &self.interest
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get_all(&self) -> &[Person] {
        &self.members
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Person> {
        self.members.iter().find(|p| p.email == email)
    }

    /// Admit `person` if they share the group's interest and their email is
    /// not already taken. Returns whether the person was appended.
    pub fn include_person(&mut self, person: Person) -> bool {
        if !person.has_interest(&self.interest) {
            tracing::debug!(
                interest = %self.interest,
                email = %person.email,
                "refused member without the group interest"
            );
            return false;
        }
        if self.find_by_email(&person.email).is_some() {
            tracing::debug!(
                interest = %self.interest,
                email = %person.email,
                "refused member with a duplicate email"
            );
            return false;
        }
        self.members.push(person);
        true
    }

    /// Remove every member with `email`. Returns whether anything was removed.
    pub fn exclude_person(&mut self, email: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|p| p.email != email);
        let removed = before - self.members.len();
        if removed == 0 {
            tracing::debug!(interest = %self.interest, email, "no member to exclude");
        }
        removed > 0
    }
}

impl Roster for Group {
    fn get_all(&self) -> &[Person] {
        &self.members
    }
}
