//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Person`]: A participant, identified by name
//! - [`Friendship`]: An undirected connection between two people
//! - [`SocialGraph`]: The store and query interface
//!
//! Traversal lives in [`algorithms`], ranking in [`recommend`].

mod network;
mod types;
pub mod algorithms;
pub mod recommend;

pub use network::SocialGraph;
pub use recommend::Recommendation;
pub use types::{Friendship, FriendshipId, Person, PersonId};
