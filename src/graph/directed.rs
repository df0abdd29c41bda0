//! Direction-aware graph implementation
//!
//! [`DirectedGraph`] owns the authoritative vertex and edge collections as
//! insertion-ordered arenas and maintains the per-vertex adjacency maps
//! according to each edge's [`Direction`]. Mutation is all small, local,
//! in-memory work; nothing here can partially fail.

use super::edge::Edge;
use super::ops::Graph;
use super::types::{Direction, EdgeId, VertexId};
use super::vertex::Vertex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered directed graph
///
/// The two arenas are the source of truth: a vertex or edge absent from them
/// is not part of the graph even if a stale handle still names it. Adjacency
/// maps only ever reference live arena entries; every mutation restores that
/// invariant before returning.
///
/// The structure is unsynchronized by design. `&mut self` on every mutating
/// operation makes exclusive access compiler-enforced; share behind a lock if
/// multiple threads need it. Iteration snapshots (`vertices`, `out_edges`,
/// ...) are plain `Vec`s and stay valid across later mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectedGraph<V, E> {
    /// Vertex arena in insertion order
    vertices: IndexMap<VertexId, Vertex<V>>,

    /// Edge arena in insertion order
    edges: IndexMap<EdgeId, Edge<E>>,

    /// Next vertex handle
    next_vertex_id: u64,

    /// Next edge handle
    next_edge_id: u64,
}

impl<V, E> DirectedGraph<V, E> {
    /// Create a new empty graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    fn mint_vertex_id(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        id
    }

    fn mint_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }

    /// Drop one edge record and its adjacency entries on both sides
    fn unlink_edge(&mut self, id: EdgeId) -> Option<Edge<E>> {
        let edge = self.edges.shift_remove(&id)?;
        if let Some(v) = self.vertices.get_mut(&edge.from()) {
            v.unlink_out(edge.to());
        }
        if let Some(v) = self.vertices.get_mut(&edge.to()) {
            v.unlink_in(edge.from());
        }
        Some(edge)
    }
}

impl<V: PartialEq, E: PartialEq> Graph<V, E> for DirectedGraph<V, E> {
    fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(&id)
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(&id)
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().copied().collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = self.mint_vertex_id();
        self.vertices.insert(id, Vertex::new(payload));
        id
    }

    fn adopt_vertex(&mut self, vertex: Vertex<V>) -> VertexId {
        // Handles are graph-local, so only the payload carries over
        self.add_vertex(vertex.into_payload())
    }

    fn add_edge_directed(
        &mut self,
        from: VertexId,
        to: VertexId,
        payload: E,
        direction: Direction,
    ) -> Option<EdgeId> {
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            tracing::debug!(%from, %to, "add_edge with missing endpoint, ignoring");
            return None;
        }
        if let Some(existing) = self.edge_between(from, to) {
            return Some(existing);
        }

        let id = self.mint_edge_id();
        if direction.records_outgoing() {
            if let Some(v) = self.vertices.get_mut(&from) {
                v.link_out(to, id);
            }
        }
        if direction.records_incoming() {
            if let Some(v) = self.vertices.get_mut(&to) {
                v.link_in(from, id);
            }
        }
        self.edges.insert(id, Edge::new(from, to, payload, direction));
        Some(id)
    }

    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<V>> {
        if !self.vertices.contains_key(&id) {
            tracing::debug!(vertex = %id, "remove_vertex for unknown handle, ignoring");
            return None;
        }

        // Every adjacency entry naming `id` comes from an incident edge, so
        // dropping those edges scrubs the neighbors' maps too. The edge arena
        // is scanned rather than the vertex's own maps because an `Out` or
        // `In` edge is recorded on one side only.
        let incident: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|(_, e)| e.from() == id || e.to() == id)
            .map(|(eid, _)| *eid)
            .collect();
        for eid in incident {
            self.unlink_edge(eid);
        }

        self.vertices.shift_remove(&id)
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge<E>> {
        let id = self.edge_between(from, to)?;
        self.unlink_edge(id)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.next_vertex_id = 1;
        self.next_edge_id = 1;
    }
}

impl<V, E> Default for DirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq, E: PartialEq> PartialEq for DirectedGraph<V, E> {
    /// Structural equality over the ordered collections, element by element
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self.edges.len() == other.edges.len()
            && self
                .vertices
                .values()
                .zip(other.vertices.values())
                .all(|(a, b)| a == b)
            && self
                .edges
                .values()
                .zip(other.edges.values())
                .all(|(a, b)| a == b)
    }
}

impl<V: Eq, E: Eq> Eq for DirectedGraph<V, E> {}

impl<V: std::hash::Hash, E: std::hash::Hash> std::hash::Hash for DirectedGraph<V, E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.vertices.len());
        for v in self.vertices.values() {
            v.hash(state);
        }
        state.write_usize(self.edges.len());
        for e in self.edges.values() {
            e.hash(state);
        }
    }
}
