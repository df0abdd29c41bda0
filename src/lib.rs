//! Adjacency
//!
//! An insertion-ordered directed graph container. Vertices wrap arbitrary
//! caller payloads; edges wrap payloads too and carry a direction tag that
//! decides which per-vertex adjacency maps record them. Mutation keeps the
//! incoming and outgoing views consistent: removing a vertex scrubs every
//! adjacency entry that referenced it, on every surviving neighbor.
//!
//! Identity is payload equality throughout — two vertices wrapping equal
//! payloads are the same vertex as far as lookups are concerned, and edge
//! insertion between an ordered pair is get-or-create. Payloads must
//! therefore not be mutated in ways that change their equality while inside
//! a graph.
//!
//! The structure is unsynchronized and single-threaded; all mutation takes
//! `&mut self`.
//!
//! ## Example Usage
//!
//! ```rust
//! use adjacency::{Direction, DirectedGraph, Graph};
//!
//! let mut graph = DirectedGraph::new();
//!
//! // Create vertices
//! let v1 = graph.add_vertex("V1");
//! let v2 = graph.add_vertex("V2");
//!
//! // Relate them bidirectionally (the default direction)
//! let e1 = graph.add_edge(v1, v2, "E1").unwrap();
//! assert_eq!(graph.out_edges(v1).len(), 1);
//! assert_eq!(graph.in_edges(v2).len(), 1);
//!
//! // Inserting again on the same pair returns the existing edge
//! assert_eq!(graph.add_edge(v1, v2, "other"), Some(e1));
//!
//! // Walk across the edge from either side
//! assert_eq!(graph.across(v1, e1), Some(v2));
//!
//! // Directed insertion records one side only
//! let v3 = graph.add_vertex("V3");
//! graph.add_edge_directed(v1, v3, "E2", Direction::Out);
//! assert_eq!(graph.in_degree(v3), 0);
//! ```

#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DirectedGraph, Direction, Edge, EdgeId, Graph, GraphError, GraphResult, Vertex, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
