//! Directed graph container
//!
//! This module implements an insertion-ordered graph of payload-wrapping
//! vertices joined by labeled, direction-tagged edges:
//! - Vertices and edges wrap arbitrary caller payloads; payload equality is
//!   element identity
//! - Per-vertex adjacency maps, one per side, maintained according to each
//!   edge's direction (`In`, `Out`, `Both`)
//! - Arena storage addressed by stable handles, so the vertex/edge reference
//!   cycle never needs shared ownership

pub mod directed;
pub mod edge;
pub mod ops;
pub mod types;
pub mod vertex;

// Re-export main types
pub use directed::DirectedGraph;
pub use edge::Edge;
pub use ops::{Graph, GraphError, GraphResult};
pub use types::{Direction, EdgeId, VertexId};
pub use vertex::Vertex;
