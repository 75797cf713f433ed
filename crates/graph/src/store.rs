use std::collections::{HashMap, HashSet};

use ripple_core::{Amount, PersonId, SeqIndex};

use crate::person::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub person_count: usize,
    /// Undirected edges, each counted once.
    pub friendship_count: usize,
    pub purchase_count: usize,
}

/// The authoritative person table: identifier → [`Person`].
///
/// Every edge lives in both endpoints' friend sets; the mutators here are
/// the only way to change either side.
#[derive(Debug, Default)]
pub struct SocialGraph {
    persons: HashMap<PersonId, Person>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self {
            persons: HashMap::new(),
        }
    }

    /// Return the person for `id`, creating an empty one on first reference.
    pub fn ensure_person(&mut self, id: &str) -> &mut Person {
        self.persons
            .entry(id.to_string())
            .or_insert_with(|| Person::new(id))
    }

    /// Add the undirected edge `a`–`b`, creating either endpoint if unknown.
    /// Re-adding an existing edge is a no-op.
    pub fn add_friend(&mut self, a: &str, b: &str) {
        self.ensure_person(a).add_friend(b);
        self.ensure_person(b).add_friend(a);
    }

    /// Dissolve the edge `a`–`b`.
    ///
    /// The log may contain an unfriend whose befriend was never seen, so an
    /// unknown endpoint or a missing edge leaves the graph untouched.
    /// Returns whether anything was removed.
    pub fn remove_friend(&mut self, a: &str, b: &str) -> bool {
        if !(self.persons.contains_key(a) && self.persons.contains_key(b)) {
            return false;
        }
        let mut removed = false;
        if let Some(person) = self.persons.get_mut(a) {
            removed |= person.remove_friend(b);
        }
        if let Some(person) = self.persons.get_mut(b) {
            removed |= person.remove_friend(a);
        }
        removed
    }

    /// Append a purchase to `id`'s history, creating the person if unknown.
    pub fn record_purchase(&mut self, id: &str, amount: Amount, timestamp: &str, seq: SeqIndex) {
        self.ensure_person(id)
            .add_purchase(amount, timestamp.to_string(), seq);
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.persons.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.persons.contains_key(id)
    }

    /// Direct friends of `id`; `None` if the person is unknown.
    pub fn friends_of(&self, id: &str) -> Option<&HashSet<PersonId>> {
        self.persons.get(id).map(Person::friends)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn stats(&self) -> GraphStats {
        // A self-loop sits in one friend set only; weight it twice so the
        // halving below counts it as a single edge.
        let endpoint_refs: usize = self
            .persons
            .values()
            .map(|p| {
                p.friends()
                    .iter()
                    .map(|f| if *f == p.id { 2 } else { 1 })
                    .sum::<usize>()
            })
            .sum();

        GraphStats {
            person_count: self.persons.len(),
            friendship_count: endpoint_refs / 2,
            purchase_count: self.persons.values().map(Person::purchase_count).sum(),
        }
    }
}
