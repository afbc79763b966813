//! Shortest-path traversal over the social graph.
//!
//! Paths are found with breadth-first search, which yields a path with the
//! fewest friendships. When several shortest paths exist, the one found
//! first wins; that follows neighbor order, which is friendship insertion
//! order.

use crate::graph::{Person, PersonId, SocialGraph};
use log::trace;
use std::collections::{HashMap, HashSet, VecDeque};

/// Shortest path from `start` to `goal`, both endpoints included.
///
/// Returns an empty Vec if either name is unknown or `goal` cannot be
/// reached, and `[start]` when both names resolve to the same person.
pub fn shortest_path(graph: &SocialGraph, start: &str, goal: &str) -> Vec<Person> {
    let (Some(start_id), Some(goal_id)) = (graph.find_person(start), graph.find_person(goal))
    else {
        return Vec::new();
    };

    bfs_path(graph, start_id, goal_id, &HashSet::new())
        .map(|ids| to_people(graph, &ids))
        .unwrap_or_default()
}

/// Shortest path from `start` to `goal` that skips every blacklisted person.
///
/// # Rules
/// - Empty if either endpoint is unknown.
/// - Empty if `start` or `goal` is itself on the blacklist.
/// - `[start]` when both names resolve to the same person.
/// - Blacklisted names not in the graph have no effect.
pub fn shortest_path_avoiding<I, S>(
    graph: &SocialGraph,
    start: &str,
    goal: &str,
    blacklist: I,
) -> Vec<Person>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (Some(start_id), Some(goal_id)) = (graph.find_person(start), graph.find_person(goal))
    else {
        return Vec::new();
    };

    let blocked: HashSet<PersonId> = blacklist
        .into_iter()
        .filter_map(|name| graph.find_person(name.as_ref()))
        .collect();

    if blocked.contains(&start_id) || blocked.contains(&goal_id) {
        trace!("Endpoint of {start:?} -> {goal:?} is blacklisted");
        return Vec::new();
    }

    bfs_path(graph, start_id, goal_id, &blocked)
        .map(|ids| to_people(graph, &ids))
        .unwrap_or_default()
}

/// Number of friendships on a shortest path from `start` to `goal`.
///
/// `Some(0)` when both names are the same person, `None` when either is
/// unknown or no path exists.
pub fn distance(graph: &SocialGraph, start: &str, goal: &str) -> Option<usize> {
    let start_id = graph.find_person(start)?;
    let goal_id = graph.find_person(goal)?;
    bfs_path(graph, start_id, goal_id, &HashSet::new()).map(|ids| ids.len() - 1)
}

/// Breadth-first search from `start` to `goal` that never enters `blocked`.
///
/// Returns the ids along the path, `start` first, or `None` if unreachable.
/// Both endpoints must exist and must not be in `blocked`.
fn bfs_path(
    graph: &SocialGraph,
    start: PersonId,
    goal: PersonId,
    blocked: &HashSet<PersonId>,
) -> Option<Vec<PersonId>> {
    if start == goal {
        return Some(vec![start]);
    }

    // Blacklisted people count as already visited, so they are never expanded
    let mut visited: HashSet<PersonId> = blocked.clone();
    let mut parent: HashMap<PersonId, PersonId> = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }

        for neighbor in graph.neighbor_ids(current) {
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }
    trace!("BFS {start} -> {goal} visited {} people", visited.len() - blocked.len());

    if !parent.contains_key(&goal) {
        return None;
    }

    let mut path = vec![goal];
    let mut at = goal;
    while let Some(&prev) = parent.get(&at) {
        path.push(prev);
        at = prev;
    }
    path.reverse();

    Some(path)
}

fn to_people(graph: &SocialGraph, ids: &[PersonId]) -> Vec<Person> {
    ids.iter()
        .filter_map(|id| graph.person_by_id(*id).cloned())
        .collect()
}
