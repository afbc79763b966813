//! Main SocialGraph interface for graph operations.

use super::algorithms;
use super::recommend::{self, Recommendation};
use super::types::{pair_key, Friendship, FriendshipId, Person, PersonId};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use log::{debug, info, trace};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The social graph store.
///
/// `SocialGraph` owns every person and friendship. People and friendships
/// live in id-keyed arenas; ids are handed out by monotonic counters, so
/// ascending id order is insertion order. A name index resolves identities
/// in O(1) and a pair index answers `are_friends` in O(1).
///
/// Mutations come in two flavors. The plain methods (`add_person`,
/// `add_friend`, `unfriend`, `delete_person`, `rename_person`) never fail:
/// a refused mutation is a no-op. The `try_*` methods perform the same
/// mutation but report why it was refused.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    config: GraphConfig,
    // Counters for monotonic ID generation
    person_counter: PersonId,
    friendship_counter: FriendshipId,
    // Arenas, iterated in id (= insertion) order
    people: BTreeMap<PersonId, Person>,
    friendships: BTreeMap<FriendshipId, Friendship>,
    // Name -> id
    names: HashMap<String, PersonId>,
    // Unordered pair -> friendship
    pairs: HashMap<(PersonId, PersonId), FriendshipId>,
    // Person -> incident friendships
    adjacency: HashMap<PersonId, BTreeSet<FriendshipId>>,
}

impl SocialGraph {
    /// Create an empty graph with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with an explicit config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a graph with the default config from people and friendship pairs.
    ///
    /// Equivalent to calling [`add_person`](Self::add_person) for every name
    /// and then [`add_friend`](Self::add_friend) for every pair, so duplicates
    /// and pairs naming unknown people are dropped.
    pub fn from_parts<P, F, S, T>(people: P, friendships: F) -> Self
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        Self::from_parts_with_config(GraphConfig::default(), people, friendships)
    }

    /// Build a graph from people and friendship pairs under `config`.
    ///
    /// Name trimming and the self-friendship rule apply to every entry.
    pub fn from_parts_with_config<P, F, S, T>(
        config: GraphConfig,
        people: P,
        friendships: F,
    ) -> Self
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: IntoIterator<Item = (T, T)>,
        T: AsRef<str>,
    {
        let mut graph = Self::with_config(config);
        for name in people {
            graph.add_person(name.as_ref());
        }
        for (a, b) in friendships {
            graph.add_friend(a.as_ref(), b.as_ref());
        }
        info!(
            "Built graph with {} people and {} friendships",
            graph.person_count(),
            graph.friendship_count()
        );
        graph
    }

    /// The config this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ===== Identity =====

    /// Resolve a name to its person id.
    pub fn find_person(&self, name: &str) -> Option<PersonId> {
        self.names.get(self.config.canonical(name)).copied()
    }

    /// Whether a person with this name is stored.
    pub fn contains_person(&self, name: &str) -> bool {
        self.find_person(name).is_some()
    }

    /// Look up a person by name.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.find_person(name).and_then(|id| self.people.get(&id))
    }

    /// Look up a person by id.
    pub fn person_by_id(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    // ===== People =====

    /// Add a person. Adding a name that is already present does nothing.
    pub fn add_person(&mut self, name: &str) {
        if let Err(e) = self.try_add_person(name) {
            debug!("add_person ignored: {e}");
        }
    }

    /// Add a person, reporting a duplicate name.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PersonAlreadyExists`] if the name is taken.
    pub fn try_add_person(&mut self, name: &str) -> Result<PersonId> {
        let name = self.config.canonical(name);
        if self.names.contains_key(name) {
            return Err(GraphError::PersonAlreadyExists {
                name: name.to_string(),
            });
        }

        let id = self.next_person_id();
        debug!("Adding person: id={id}, name={name:?}");
        self.people.insert(id, Person::new(name));
        self.names.insert(name.to_string(), id);

        Ok(id)
    }

    /// Delete a person and every friendship they are part of.
    ///
    /// Returns whether the person existed.
    pub fn delete_person(&mut self, name: &str) -> bool {
        match self.try_delete_person(name) {
            Ok(_) => true,
            Err(e) => {
                debug!("delete_person ignored: {e}");
                false
            }
        }
    }

    /// Delete a person and their friendships, returning the removed person.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PersonNotFound`] if the name is unknown; no
    /// friendship is touched in that case.
    pub fn try_delete_person(&mut self, name: &str) -> Result<Person> {
        let id = self
            .find_person(name)
            .ok_or_else(|| GraphError::person_not_found(name))?;
        debug!("Deleting person: id={id}, name={name:?}");

        let incident: Vec<FriendshipId> = self
            .adjacency
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();

        trace!("Deleting {} friendships of person {}", incident.len(), id);
        for friendship_id in incident {
            self.remove_friendship(friendship_id);
        }

        self.adjacency.remove(&id);
        let person = self
            .people
            .remove(&id)
            .ok_or_else(|| GraphError::person_not_found(name))?;
        self.names.remove(person.name());

        Ok(person)
    }

    /// Rename a person, keeping their position and friendships.
    ///
    /// Does nothing if `old` is unknown or `new` is already taken.
    pub fn rename_person(&mut self, old: &str, new: &str) {
        if let Err(e) = self.try_rename_person(old, new) {
            debug!("rename_person ignored: {e}");
        }
    }

    /// Rename a person, reporting why the rename was refused.
    ///
    /// Renaming a person to their current name succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PersonNotFound`] if `old` is unknown and
    /// [`GraphError::PersonAlreadyExists`] if another person is named `new`.
    pub fn try_rename_person(&mut self, old: &str, new: &str) -> Result<()> {
        let id = self
            .find_person(old)
            .ok_or_else(|| GraphError::person_not_found(old))?;
        let new = self.config.canonical(new);

        match self.names.get(new) {
            Some(&existing) if existing == id => return Ok(()),
            Some(_) => {
                return Err(GraphError::PersonAlreadyExists {
                    name: new.to_string(),
                })
            }
            None => {}
        }

        let person = self
            .people
            .get_mut(&id)
            .ok_or_else(|| GraphError::person_not_found(old))?;
        debug!("Renaming person {id}: {:?} -> {new:?}", person.name());
        self.names.remove(person.name());
        person.set_name(new);
        self.names.insert(new.to_string(), id);

        Ok(())
    }

    // ===== Friendships =====

    /// Connect two existing people.
    ///
    /// Does nothing if either is unknown, if they are already friends, or
    /// (unless the config allows it) if both names are the same person.
    pub fn add_friend(&mut self, a: &str, b: &str) {
        if let Err(e) = self.try_add_friend(a, b) {
            debug!("add_friend ignored: {e}");
        }
    }

    /// Connect two people, reporting why the friendship was refused.
    ///
    /// # Errors
    ///
    /// - [`GraphError::PersonNotFound`] if either name is unknown
    /// - [`GraphError::SelfFriendship`] if both names resolve to the same
    ///   person and the config rejects self friendships
    /// - [`GraphError::AlreadyFriends`] if the pair is already connected
    pub fn try_add_friend(&mut self, a: &str, b: &str) -> Result<FriendshipId> {
        let a_id = self
            .find_person(a)
            .ok_or_else(|| GraphError::person_not_found(a))?;
        let b_id = self
            .find_person(b)
            .ok_or_else(|| GraphError::person_not_found(b))?;

        if a_id == b_id && !self.config.allow_self_friendship {
            return Err(GraphError::SelfFriendship {
                name: a.to_string(),
            });
        }

        let key = pair_key(a_id, b_id);
        if self.pairs.contains_key(&key) {
            return Err(GraphError::AlreadyFriends {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let id = self.next_friendship_id();
        debug!("Adding friendship: id={id}, {a:?} -- {b:?}");
        self.friendships.insert(id, Friendship::new(id, a_id, b_id));
        self.pairs.insert(key, id);
        self.adjacency.entry(a_id).or_default().insert(id);
        self.adjacency.entry(b_id).or_default().insert(id);

        Ok(id)
    }

    /// Remove the friendship between two people, if there is one.
    pub fn unfriend(&mut self, a: &str, b: &str) {
        if let Err(e) = self.try_unfriend(a, b) {
            debug!("unfriend ignored: {e}");
        }
    }

    /// Remove the friendship between two people.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::FriendshipNotFound`] if the pair is not
    /// connected, including when either name is unknown.
    pub fn try_unfriend(&mut self, a: &str, b: &str) -> Result<()> {
        let id = self
            .friendship_between(a, b)
            .ok_or_else(|| GraphError::FriendshipNotFound {
                a: a.to_string(),
                b: b.to_string(),
            })?;
        debug!("Removing friendship: id={id}, {a:?} -- {b:?}");
        self.remove_friendship(id);
        Ok(())
    }

    /// Look up a friendship by id.
    pub fn friendship(&self, id: FriendshipId) -> Option<&Friendship> {
        self.friendships.get(&id)
    }

    /// Whether the two people are friends. Unknown names are never friends.
    pub fn are_friends(&self, a: &str, b: &str) -> bool {
        self.friendship_between(a, b).is_some()
    }

    /// Id of the friendship connecting `a` and `b`, in either order.
    pub fn friendship_between(&self, a: &str, b: &str) -> Option<FriendshipId> {
        let a_id = self.find_person(a)?;
        let b_id = self.find_person(b)?;
        self.pairs.get(&pair_key(a_id, b_id)).copied()
    }

    /// Direct friends of a person, in friendship insertion order.
    ///
    /// Empty if the person is unknown or has no friends.
    pub fn neighbors(&self, name: &str) -> Vec<Person> {
        match self.find_person(name) {
            Some(id) => self.neighbor_people(id).collect(),
            None => Vec::new(),
        }
    }

    /// Ids of the direct friends of `id`, in friendship insertion order.
    pub fn neighbor_ids(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(move |fid| self.friendships.get(fid).and_then(|f| f.other(id)))
    }

    /// Number of friends of a person (0 if unknown).
    pub fn degree(&self, name: &str) -> usize {
        self.find_person(name)
            .and_then(|id| self.adjacency.get(&id))
            .map_or(0, BTreeSet::len)
    }

    // ===== Enumeration =====

    /// All people, in insertion order.
    pub fn people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.values()
    }

    /// Ids of all people, in insertion order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.people.keys().copied()
    }

    /// All friendships as endpoint pairs, in insertion order.
    pub fn friendships(&self) -> impl Iterator<Item = (&Person, &Person)> + '_ {
        self.friendships
            .values()
            .filter_map(move |f| Some((self.people.get(&f.a)?, self.people.get(&f.b)?)))
    }

    /// The whole network: every person with their friends.
    ///
    /// People come in insertion order, each friend list in friendship
    /// insertion order.
    pub fn network(&self) -> Vec<(Person, Vec<Person>)> {
        self.people
            .iter()
            .map(|(&id, person)| (person.clone(), self.neighbor_people(id).collect()))
            .collect()
    }

    /// Get the total number of people in the graph.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Get the total number of friendships in the graph.
    pub fn friendship_count(&self) -> usize {
        self.friendships.len()
    }

    /// Whether the graph holds no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Remove every person and friendship and reset the id counters.
    pub fn clear(&mut self) {
        debug!(
            "Clearing graph: {} people, {} friendships",
            self.people.len(),
            self.friendships.len()
        );
        self.people.clear();
        self.friendships.clear();
        self.names.clear();
        self.pairs.clear();
        self.adjacency.clear();
        self.person_counter = 0;
        self.friendship_counter = 0;
    }

    // ===== Algorithm Methods =====

    /// Shortest path (fewest friendships) from `start` to `goal`.
    ///
    /// Includes both endpoints. Empty if either is unknown or `goal` is
    /// unreachable; `[start]` when both names are the same person.
    pub fn shortest_path(&self, start: &str, goal: &str) -> Vec<Person> {
        algorithms::shortest_path(self, start, goal)
    }

    /// Shortest path from `start` to `goal` that never passes through a
    /// blacklisted person.
    ///
    /// Empty if `start` or `goal` is itself blacklisted. Blacklisted names
    /// that are not in the graph are ignored.
    pub fn shortest_path_avoiding<I, S>(
        &self,
        start: &str,
        goal: &str,
        blacklist: I,
    ) -> Vec<Person>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        algorithms::shortest_path_avoiding(self, start, goal, blacklist)
    }

    /// Number of friendships on a shortest path, or `None` if unreachable.
    pub fn distance(&self, start: &str, goal: &str) -> Option<usize> {
        algorithms::distance(self, start, goal)
    }

    /// Number of friends `a` and `b` have in common (0 if either is unknown).
    pub fn common_friends(&self, a: &str, b: &str) -> usize {
        recommend::common_friends(self, a, b)
    }

    /// Up to `k` friend suggestions for `person`, with mutual-friend counts.
    pub fn recommendations(&self, person: &str, k: usize) -> Vec<Recommendation> {
        recommend::recommendations(self, person, k)
    }

    /// Up to `k` suggested friends for `person`, best first.
    pub fn top_k(&self, person: &str, k: usize) -> Vec<Person> {
        recommend::top_k(self, person, k)
    }

    // ===== Export Methods =====

    /// Render the graph in Graphviz DOT format.
    pub fn export_dot(&self) -> String {
        crate::export::export_dot(self)
    }

    /// Render the graph as D3.js-compatible JSON.
    pub fn export_json(&self) -> Result<String> {
        crate::export::export_json(self)
    }

    // Private helper methods

    fn next_person_id(&mut self) -> PersonId {
        let id = self.person_counter;
        self.person_counter += 1;
        id
    }

    fn next_friendship_id(&mut self) -> FriendshipId {
        let id = self.friendship_counter;
        self.friendship_counter += 1;
        id
    }

    fn neighbor_people(&self, id: PersonId) -> impl Iterator<Item = Person> + '_ {
        self.neighbor_ids(id)
            .filter_map(move |n| self.people.get(&n).cloned())
    }

    fn remove_friendship(&mut self, id: FriendshipId) {
        let Some(friendship) = self.friendships.remove(&id) else {
            return;
        };
        self.pairs.remove(&friendship.key());
        for endpoint in [friendship.a, friendship.b] {
            if let Some(set) = self.adjacency.get_mut(&endpoint) {
                set.remove(&id);
            }
        }
    }
}
