//! # socialgraph
//!
//! An in-memory social graph: people, friendships, shortest paths and
//! mutual-friend recommendations.
//!
//! ## Core Principles
//!
//! - **Name Is Identity**: A person is their name; two people never share one
//! - **Soft Failure**: Mutations on unknown people are no-ops, queries on
//!   unknown people are empty. `try_*` methods report the reason
//! - **Deterministic Order**: Iteration follows insertion order everywhere
//! - **Zero Magic**: No I/O, no background work, no global state
//!
//! ## Architecture
//!
//! ```text
//! Caller (CLI, service, tests)
//!     ↓
//! Export (DOT, JSON, text rendering)
//!     ↓
//! Queries (shortest paths, recommendations)
//!     ↓
//! Graph Store (people, friendships, indexes)
//! ```
//!
//! The store is single-threaded. A host that shares it between threads
//! wraps the whole graph in one lock.
//!
//! ## Example
//!
//! ```rust
//! use socialgraph::SocialGraph;
//!
//! let mut graph = SocialGraph::new();
//! for name in ["Alice", "Bob", "Carol", "Dave"] {
//!     graph.add_person(name);
//! }
//! graph.add_friend("Alice", "Bob");
//! graph.add_friend("Bob", "Carol");
//! graph.add_friend("Carol", "Dave");
//!
//! let path = graph.shortest_path("Alice", "Dave");
//! assert_eq!(socialgraph::export::format_path(&path), "Alice Bob Carol Dave");
//! assert!(graph.shortest_path_avoiding("Alice", "Dave", ["Bob"]).is_empty());
//! assert_eq!(graph.common_friends("Alice", "Carol"), 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{Friendship, FriendshipId, Person, PersonId, Recommendation, SocialGraph};
