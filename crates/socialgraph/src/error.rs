//! Error types for socialgraph operations.
//!
//! The graph's public contract is soft: the plain mutation methods never fail
//! and queries answer unknown names with empty results. [`GraphError`] is the
//! diagnostic channel behind that contract, returned by the `try_*` methods
//! so callers (and tests) can see why a mutation did nothing.

use thiserror::Error;

/// Result type alias for socialgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Reasons a graph operation was refused.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No person with that name is stored
    #[error("Person not found: {name}")]
    PersonNotFound {
        /// Name that failed to resolve
        name: String,
    },

    /// A person with that name is already stored
    #[error("Person already exists: {name}")]
    PersonAlreadyExists {
        /// Name that is already taken
        name: String,
    },

    /// Both endpoints of a friendship are the same person
    #[error("Cannot befriend self: {name}")]
    SelfFriendship {
        /// Name of the person
        name: String,
    },

    /// The two people are already connected
    #[error("Already friends: {a} and {b}")]
    AlreadyFriends {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
    },

    /// No friendship connects the two people
    #[error("Friendship not found: {a} and {b}")]
    FriendshipNotFound {
        /// First endpoint
        a: String,
        /// Second endpoint
        b: String,
    },

    /// Configuration could not be used
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    pub(crate) fn person_not_found(name: &str) -> Self {
        Self::PersonNotFound {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_not_found_error() {
        let err = GraphError::person_not_found("Zed");
        assert_eq!(err.to_string(), "Person not found: Zed");
    }

    #[test]
    fn test_already_friends_error() {
        let err = GraphError::AlreadyFriends {
            a: "Alice".to_string(),
            b: "Bob".to_string(),
        };
        assert_eq!(err.to_string(), "Already friends: Alice and Bob");
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GraphError::serialization("Failed to parse config", Some(source));
        assert_eq!(err.to_string(), "Serialization error: Failed to parse config");
        assert!(std::error::Error::source(&err).is_some());
    }
}
