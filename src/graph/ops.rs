//! Shared graph surface
//!
//! The [`Graph`] trait carries the operations every graph flavor shares:
//! payload lookups, adjacency queries, counting, and the default-direction
//! insertion shorthand. Concrete graphs supply storage access and the
//! direction-aware mutation; everything else is provided here in terms of
//! those primitives.

use super::edge::Edge;
use super::types::{Direction, EdgeId, VertexId};
use super::vertex::Vertex;
use thiserror::Error;

/// Errors surfaced by the checked insertion variant
///
/// The primary mutation surface is total and degrades missing endpoints to
/// no-ops; this type exists for callers that want the failure spelled out.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("source vertex {0} is not in the graph")]
    MissingSource(VertexId),

    #[error("target vertex {0} is not in the graph")]
    MissingTarget(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Operations common to all graph implementations
///
/// Vertex identity is payload equality and edge identity is payload plus
/// direction, so every lookup here compares payloads rather than handles.
/// All query operations are total: unknown or stale handles yield `None`,
/// zero, or an empty collection, never a panic.
pub trait Graph<V: PartialEq, E: PartialEq> {
    /// Resolve a vertex handle
    fn vertex(&self, id: VertexId) -> Option<&Vertex<V>>;

    /// Resolve an edge handle
    fn edge(&self, id: EdgeId) -> Option<&Edge<E>>;

    /// All vertex handles in insertion order
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// All edge handles in insertion order
    fn edge_ids(&self) -> Vec<EdgeId>;

    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Number of edges
    fn edge_count(&self) -> usize;

    /// Wrap a payload in a new vertex and append it
    ///
    /// Always succeeds; duplicate payloads are allowed (lookups resolve to
    /// the first match in insertion order).
    fn add_vertex(&mut self, payload: V) -> VertexId;

    /// Append an already-constructed vertex
    ///
    /// The record receives a fresh handle and starts with empty adjacency in
    /// this graph; handles are graph-local so any adjacency the record
    /// carried elsewhere is meaningless here.
    fn adopt_vertex(&mut self, vertex: Vertex<V>) -> VertexId;

    /// Insert an edge with an explicit direction
    ///
    /// Get-or-create on the ordered pair: if [`Graph::edge_between`] already
    /// finds an edge from `from` to `to`, that edge is returned and nothing
    /// is mutated. A missing endpoint makes the whole call a no-op returning
    /// `None`.
    fn add_edge_directed(
        &mut self,
        from: VertexId,
        to: VertexId,
        payload: E,
        direction: Direction,
    ) -> Option<EdgeId>;

    /// Remove a vertex and every edge incident to it
    ///
    /// Clears the matching adjacency entries on both endpoints of every
    /// incident edge, so no surviving vertex keeps a reference to the removed
    /// one. Returns the removed record, or `None` for an unknown handle.
    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<V>>;

    /// Remove the edge between an ordered pair of vertices
    ///
    /// Resolves via [`Graph::edge_between`], then clears both endpoints'
    /// adjacency entries unconditionally, whatever the edge's direction tag.
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge<E>>;

    /// Drop every vertex and edge
    ///
    /// Afterwards the graph compares equal to a freshly constructed one.
    fn clear(&mut self);

    /// Insert a bidirectional edge (direction `Both`)
    fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> Option<EdgeId> {
        self.add_edge_directed(from, to, payload, Direction::Both)
    }

    /// Checked insertion: spell out which endpoint is missing
    fn try_add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        payload: E,
        direction: Direction,
    ) -> GraphResult<EdgeId> {
        if self.vertex(from).is_none() {
            return Err(GraphError::MissingSource(from));
        }
        if self.vertex(to).is_none() {
            return Err(GraphError::MissingTarget(to));
        }
        self.add_edge_directed(from, to, payload, direction)
            .ok_or(GraphError::MissingSource(from))
    }

    /// True iff the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// All vertices in insertion order
    fn vertices(&self) -> Vec<&Vertex<V>> {
        self.vertex_ids()
            .into_iter()
            .filter_map(|id| self.vertex(id))
            .collect()
    }

    /// All edges in insertion order
    fn edges(&self) -> Vec<&Edge<E>> {
        self.edge_ids()
            .into_iter()
            .filter_map(|id| self.edge(id))
            .collect()
    }

    /// The edge from `from` to `to`, reasoning from the outgoing side
    ///
    /// Scans `from`'s outgoing adjacency for a neighbor whose payload equals
    /// `to`'s payload. An edge inserted with direction `In` populates only
    /// `to.incoming` and is deliberately invisible to this lookup.
    fn edge_between(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let origin = self.vertex(from)?;
        let target = self.vertex(to)?;
        origin.out_entries().find_map(|(neighbor, edge)| {
            let n = self.vertex(neighbor)?;
            (n.payload() == target.payload()).then_some(edge)
        })
    }

    /// First vertex whose payload equals `payload`, in insertion order. O(n).
    fn find_vertex(&self, payload: &V) -> Option<VertexId> {
        self.vertex_ids()
            .into_iter()
            .find(|id| self.vertex(*id).map(Vertex::payload) == Some(payload))
    }

    /// First edge whose payload equals `payload`, in insertion order. O(n).
    fn find_edge(&self, payload: &E) -> Option<EdgeId> {
        self.edge_ids()
            .into_iter()
            .find(|id| self.edge(*id).map(Edge::payload) == Some(payload))
    }

    /// The vertex on the other side of `edge` relative to `vertex`
    ///
    /// Compares payloads, consistent with vertex identity: if the edge leaves
    /// a vertex equal to `vertex` the target is returned, if it arrives at
    /// one the source is returned, otherwise `None`.
    fn across(&self, vertex: VertexId, edge: EdgeId) -> Option<VertexId> {
        let e = self.edge(edge)?;
        let v = self.vertex(vertex)?;
        if self.vertex(e.from())?.payload() == v.payload() {
            return Some(e.to());
        }
        if self.vertex(e.to())?.payload() == v.payload() {
            return Some(e.from());
        }
        None
    }

    /// Size of the vertex's outgoing adjacency map; 0 for unknown handles
    fn out_degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, Vertex::out_degree)
    }

    /// Size of the vertex's incoming adjacency map; 0 for unknown handles
    fn in_degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, Vertex::in_degree)
    }

    /// Snapshot of the edges recorded in the vertex's outgoing map
    fn out_edges(&self, id: VertexId) -> Vec<&Edge<E>> {
        self.vertex(id)
            .map(|v| v.out_entries().filter_map(|(_, e)| self.edge(e)).collect())
            .unwrap_or_default()
    }

    /// Snapshot of the edges recorded in the vertex's incoming map
    fn in_edges(&self, id: VertexId) -> Vec<&Edge<E>> {
        self.vertex(id)
            .map(|v| v.in_entries().filter_map(|(_, e)| self.edge(e)).collect())
            .unwrap_or_default()
    }
}
