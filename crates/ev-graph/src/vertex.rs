//! Graph vertices: type, capacity, and live membership.

use std::collections::HashSet;

use ev_core::{Id, VertexType};

/// Maximum simultaneous occupants of a vertex.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    /// No limit — agents never wait here for room.
    Unbounded,
    /// At most `n` simultaneous members.
    Finite(u32),
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Unbounded
    }
}

impl Capacity {
    /// `true` if `count` members exceeds this capacity. Always `false` for `Unbounded`.
    pub fn is_exceeded_by(self, count: usize) -> bool {
        match self {
            Capacity::Unbounded => false,
            Capacity::Finite(n) => count > n as usize,
        }
    }
}

/// A graph vertex: a typed, capacity-bounded location agents occupy.
///
/// Two vertices constructed with the same id are the same vertex — the
/// `Graph` stores exactly one `Vertex<K>` per key, so identity-by-id falls
/// out of the map itself rather than needing an intern table.
#[derive(Clone, Debug)]
pub struct Vertex<K: Id, A: Id> {
    id: K,
    pub kind: VertexType,
    pub capacity: Capacity,
    /// Agents currently occupying this vertex (acting or waiting).
    ///
    /// This is a back-reference by value (agent ids are cheap to clone),
    /// never an owning reference to agent state — mirroring the "membership
    /// set must never own the agent" guidance for resolving cyclic
    /// references between vertices and agents.
    pub members: HashSet<A>,
}

impl<K: Id, A: Id> Vertex<K, A> {
    pub fn new(id: K, kind: VertexType, capacity: Capacity) -> Self {
        Self {
            id,
            kind,
            capacity,
            members: HashSet::new(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    /// `true` if `members.len()` exceeds `capacity` right now.
    pub fn is_over_capacity(&self) -> bool {
        self.capacity.is_exceeded_by(self.members.len())
    }
}
