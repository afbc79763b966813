//! Mutual-friend recommendations.
//!
//! A candidate for `person` is anyone who is neither `person` nor already
//! their friend and who shares at least one friend with them. Candidates are
//! ranked by the number of shared friends, highest first; equal counts keep
//! the graph's insertion order.

use crate::graph::{Person, SocialGraph};
use log::trace;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;

/// A suggested friend and how many friends they share with the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The suggested person
    pub person: Person,
    /// Number of friends in common with the target
    pub mutual_friends: usize,
}

/// Number of friends `a` and `b` have in common.
///
/// Returns 0 if either name is unknown.
pub fn common_friends(graph: &SocialGraph, a: &str, b: &str) -> usize {
    let (Some(a_id), Some(b_id)) = (graph.find_person(a), graph.find_person(b)) else {
        return 0;
    };

    let friends: HashSet<_> = graph.neighbor_ids(a_id).collect();
    graph
        .neighbor_ids(b_id)
        .filter(|id| friends.contains(id))
        .count()
}

/// Up to `k` ranked suggestions for `person`, with their mutual-friend counts.
///
/// Empty if `person` is unknown or `k` is 0.
pub fn recommendations(graph: &SocialGraph, person: &str, k: usize) -> Vec<Recommendation> {
    let Some(target) = graph.find_person(person) else {
        return Vec::new();
    };
    if k == 0 {
        return Vec::new();
    }

    let friends: HashSet<_> = graph.neighbor_ids(target).collect();
    let mut candidates: Vec<Recommendation> = graph
        .person_ids()
        .filter(|&id| id != target && !friends.contains(&id))
        .filter_map(|id| {
            let mutual = graph
                .neighbor_ids(id)
                .filter(|n| friends.contains(n))
                .count();
            if mutual == 0 {
                return None;
            }
            let person = graph.person_by_id(id)?.clone();
            Some(Recommendation {
                person,
                mutual_friends: mutual,
            })
        })
        .collect();
    trace!("{} recommendation candidates for {person:?}", candidates.len());

    // Stable: ties keep insertion order
    candidates.sort_by_key(|r| Reverse(r.mutual_friends));
    candidates.truncate(k);
    candidates
}

/// Up to `k` suggested friends for `person`, best first.
pub fn top_k(graph: &SocialGraph, person: &str, k: usize) -> Vec<Person> {
    recommendations(graph, person, k)
        .into_iter()
        .map(|r| r.person)
        .collect()
}
