//! Vertex implementation
//!
//! A vertex wraps one caller-supplied payload and owns two insertion-ordered
//! adjacency maps, one per side of the relation. The maps key by neighbor
//! handle and value the incident edge handle; the graph is the only code that
//! writes to them.

use super::types::{EdgeId, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A vertex wrapping a caller payload
///
/// Equality and hashing are defined by the payload alone: two vertices
/// wrapping equal payloads compare equal regardless of what they are
/// connected to. The payload must not be mutated in a way that changes its
/// equality while the vertex is inside a graph; adjacency lookups treat the
/// payload as a stable key and behave unpredictably otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<V> {
    /// Caller payload; identity of the vertex for all lookups
    payload: V,

    /// Neighbor vertex -> edge leaving this vertex toward it
    outgoing: IndexMap<VertexId, EdgeId>,

    /// Neighbor vertex -> edge arriving at this vertex from it
    incoming: IndexMap<VertexId, EdgeId>,
}

impl<V> Vertex<V> {
    /// Create a detached vertex with empty adjacency
    pub fn new(payload: V) -> Self {
        Vertex {
            payload,
            outgoing: IndexMap::new(),
            incoming: IndexMap::new(),
        }
    }

    /// Borrow the payload
    pub fn payload(&self) -> &V {
        &self.payload
    }

    /// Consume the vertex, yielding the payload
    pub fn into_payload(self) -> V {
        self.payload
    }

    /// Number of outgoing adjacency entries
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of incoming adjacency entries
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Outgoing `(neighbor, edge)` entries in insertion order
    pub fn out_entries(&self) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.outgoing.iter().map(|(v, e)| (*v, *e))
    }

    /// Incoming `(neighbor, edge)` entries in insertion order
    pub fn in_entries(&self) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.incoming.iter().map(|(v, e)| (*v, *e))
    }

    /// Neighbors this vertex points at, in insertion order
    pub fn out_neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing.keys().copied()
    }

    /// Neighbors pointing at this vertex, in insertion order
    pub fn in_neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.incoming.keys().copied()
    }

    pub(crate) fn link_out(&mut self, to: VertexId, edge: EdgeId) {
        self.outgoing.insert(to, edge);
    }

    pub(crate) fn link_in(&mut self, from: VertexId, edge: EdgeId) {
        self.incoming.insert(from, edge);
    }

    /// Drop the outgoing entry for `to`, preserving residual order
    pub(crate) fn unlink_out(&mut self, to: VertexId) -> Option<EdgeId> {
        self.outgoing.shift_remove(&to)
    }

    /// Drop the incoming entry for `from`, preserving residual order
    pub(crate) fn unlink_in(&mut self, from: VertexId) -> Option<EdgeId> {
        self.incoming.shift_remove(&from)
    }
}

impl<V: PartialEq> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl<V: Eq> Eq for Vertex<V> {}

impl<V: std::hash::Hash> std::hash::Hash for Vertex<V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.payload.hash(state);
    }
}
