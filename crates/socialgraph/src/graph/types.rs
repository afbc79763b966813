//! Core graph types: people, friendships and their IDs.

use serde::Serialize;

/// Handle of a stored person (monotonic counter, never reused).
pub type PersonId = u64;

/// Handle of a stored friendship (monotonic counter, never reused).
pub type FriendshipId = u64;

/// A participant in the social graph.
///
/// A person is nothing but its name, and two persons are equal iff their
/// names are equal. The graph never stores two persons with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
}

impl Person {
    /// Create a person with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Person {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Person {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// An undirected friendship between two people.
///
/// Endpoint order is the order given at creation; it carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Friendship {
    /// Unique identifier (assigned by graph)
    pub id: FriendshipId,
    /// First endpoint
    pub a: PersonId,
    /// Second endpoint
    pub b: PersonId,
}

impl Friendship {
    /// Create a friendship (ID will be assigned by graph).
    pub fn new(id: FriendshipId, a: PersonId, b: PersonId) -> Self {
        Self { id, a, b }
    }

    /// The endpoint opposite `person`, or `None` if `person` is not an endpoint.
    ///
    /// A self friendship yields `person` itself.
    pub fn other(&self, person: PersonId) -> Option<PersonId> {
        if self.a == person {
            Some(self.b)
        } else if self.b == person {
            Some(self.a)
        } else {
            None
        }
    }

    /// Order-independent key of the endpoint pair.
    pub fn key(&self) -> (PersonId, PersonId) {
        pair_key(self.a, self.b)
    }
}

/// Order-independent key of an unordered pair.
pub(crate) fn pair_key(x: PersonId, y: PersonId) -> (PersonId, PersonId) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}
