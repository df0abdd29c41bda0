//! Core type definitions for the graph container

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for a vertex in a graph's arena
///
/// Handles are graph-local: a `VertexId` minted by one graph has no meaning
/// in another. Adjacency maps and edge endpoints store handles, never owning
/// references, so the vertex/edge reference cycle never materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// Stable handle for an edge in a graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Which adjacency maps an edge is recorded in
///
/// - `Out`: only the source vertex's outgoing map
/// - `In`: only the target vertex's incoming map
/// - `Both`: both maps (the default used by plain `add_edge`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    In,
    Out,
    #[default]
    Both,
}

impl Direction {
    /// True if an edge with this direction lands in `from.outgoing`
    pub fn records_outgoing(self) -> bool {
        matches!(self, Direction::Out | Direction::Both)
    }

    /// True if an edge with this direction lands in `to.incoming`
    pub fn records_incoming(self) -> bool {
        matches!(self, Direction::In | Direction::Both)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "IN"),
            Direction::Out => write!(f, "OUT"),
            Direction::Both => write!(f, "BOTH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "VertexId(42)");

        let id2: VertexId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_id_ordering() {
        let id1 = VertexId::new(1);
        let id2 = VertexId::new(2);
        assert!(id1 < id2);
    }

    #[test]
    fn test_direction_default_is_both() {
        assert_eq!(Direction::default(), Direction::Both);
    }

    #[test]
    fn test_direction_recording_sides() {
        assert!(Direction::Out.records_outgoing());
        assert!(!Direction::Out.records_incoming());

        assert!(Direction::In.records_incoming());
        assert!(!Direction::In.records_outgoing());

        assert!(Direction::Both.records_outgoing());
        assert!(Direction::Both.records_incoming());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(format!("{}", Direction::In), "IN");
        assert_eq!(format!("{}", Direction::Out), "OUT");
        assert_eq!(format!("{}", Direction::Both), "BOTH");
    }
}
