use std::collections::HashSet;

use ripple_core::PersonId;
use ripple_graph::SocialGraph;

/// Resolve the D-degree social network of `origin`.
///
/// Degree 1 is the direct friend set. Each further degree *replaces* the
/// current set with the union of its members' friend sets, so the result is
/// everyone reachable by a walk of exactly `degree` hops:
///
/// - the origin itself is not removed at degree >= 2; with an `A–B` edge,
///   A's degree-2 network is `{A}`;
/// - a direct friend only appears at degree >= 2 if some walk of that
///   length also ends on them.
///
/// Unknown `origin` yields an empty set. `degree` 0 is treated as 1.
pub fn resolve_network(graph: &SocialGraph, origin: &str, degree: u32) -> HashSet<PersonId> {
    let mut network: HashSet<PersonId> = match graph.friends_of(origin) {
        Some(friends) => friends.clone(),
        None => return HashSet::new(),
    };

    let mut remaining = degree;
    while remaining > 1 {
        let next = expand(graph, &network);
        // Fixed point: every further hop would yield the same set.
        if next == network {
            break;
        }
        network = next;
        if network.is_empty() {
            break;
        }
        remaining -= 1;
    }

    network
}

/// One hop outward: union of the direct friend sets of every member.
fn expand(graph: &SocialGraph, frontier: &HashSet<PersonId>) -> HashSet<PersonId> {
    let mut next = HashSet::new();
    for id in frontier {
        if let Some(friends) = graph.friends_of(id) {
            next.extend(friends.iter().cloned());
        }
    }
    next
}
