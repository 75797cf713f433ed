use std::collections::HashSet;
use std::fmt;

use ripple_core::{Amount, PersonId, Purchase, SeqIndex};

/// A member of the social network.
///
/// Friends are held by identifier only; resolving them goes back through
/// the owning [`SocialGraph`](crate::SocialGraph).
#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    friends: HashSet<PersonId>,
    purchases: Vec<Purchase>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            friends: HashSet::new(),
            purchases: Vec::new(),
        }
    }

    pub fn friends(&self) -> &HashSet<PersonId> {
        &self.friends
    }

    /// Purchase history in insertion order.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    pub fn is_friend(&self, other: &str) -> bool {
        self.friends.contains(other)
    }

    /// One side of an edge. Returns false if it was already present.
    pub(crate) fn add_friend(&mut self, other: &str) -> bool {
        self.friends.insert(other.to_string())
    }

    /// One side of an edge. Returns false if it was not present.
    pub(crate) fn remove_friend(&mut self, other: &str) -> bool {
        self.friends.remove(other)
    }

    pub(crate) fn add_purchase(&mut self, amount: Amount, timestamp: String, seq: SeqIndex) {
        self.purchases.push(Purchase {
            amount,
            timestamp,
            seq,
        });
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={}, friends={}, purchases={}",
            self.id,
            self.friend_count(),
            self.purchase_count()
        )
    }
}
