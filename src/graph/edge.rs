//! Edge implementation
//!
//! An edge wraps one caller payload, carries a direction tag, and references
//! its two endpoint vertices by handle. The direction decides which adjacency
//! maps the graph records the edge in; the endpoints themselves are fixed at
//! construction.

use super::types::{Direction, VertexId};
use serde::{Deserialize, Serialize};

/// A directed or bidirectional relation between two vertices
///
/// Equality and hashing are defined by payload and direction; the endpoints
/// do not participate. Payload, direction, and endpoints are all immutable
/// once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<E> {
    /// Caller payload; identity of the edge together with the direction
    payload: E,

    /// Which adjacency maps this edge is recorded in
    direction: Direction,

    /// Endpoint the edge leaves
    from: VertexId,

    /// Endpoint the edge arrives at
    to: VertexId,
}

impl<E> Edge<E> {
    /// Create a new edge between two vertex handles
    pub fn new(from: VertexId, to: VertexId, payload: E, direction: Direction) -> Self {
        Edge {
            payload,
            direction,
            from,
            to,
        }
    }

    /// Borrow the payload
    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// The direction tag assigned at construction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Endpoint the edge leaves
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Endpoint the edge arrives at
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// The endpoint opposite to `vertex`, or `None` if `vertex` is not an endpoint
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.from == vertex {
            Some(self.to)
        } else if self.to == vertex {
            Some(self.from)
        } else {
            None
        }
    }

    /// Check if this edge joins two specific vertices, in either order
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl<E: PartialEq> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload && self.direction == other.direction
    }
}

impl<E: Eq> Eq for Edge<E> {}

impl<E: std::hash::Hash> std::hash::Hash for Edge<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.payload.hash(state);
        self.direction.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new(VertexId::new(1), VertexId::new(2), "E1", Direction::Both);

        assert_eq!(edge.from(), VertexId::new(1));
        assert_eq!(edge.to(), VertexId::new(2));
        assert_eq!(*edge.payload(), "E1");
        assert_eq!(edge.direction(), Direction::Both);
    }

    #[test]
    fn test_equality_ignores_endpoints() {
        let a = Edge::new(VertexId::new(1), VertexId::new(2), "E", Direction::Out);
        let b = Edge::new(VertexId::new(8), VertexId::new(9), "E", Direction::Out);

        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_includes_direction() {
        let a = Edge::new(VertexId::new(1), VertexId::new(2), "E", Direction::Out);
        let b = Edge::new(VertexId::new(1), VertexId::new(2), "E", Direction::In);
        let c = Edge::new(VertexId::new(1), VertexId::new(2), "F", Direction::Out);

        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_opposite() {
        let edge = Edge::new(VertexId::new(10), VertexId::new(20), "E", Direction::Both);

        assert_eq!(edge.opposite(VertexId::new(10)), Some(VertexId::new(20)));
        assert_eq!(edge.opposite(VertexId::new(20)), Some(VertexId::new(10)));
        assert_eq!(edge.opposite(VertexId::new(30)), None);
    }

    #[test]
    fn test_connects() {
        let edge = Edge::new(VertexId::new(10), VertexId::new(20), "E", Direction::Out);

        assert!(edge.connects(VertexId::new(10), VertexId::new(20)));
        assert!(edge.connects(VertexId::new(20), VertexId::new(10)));
        assert!(!edge.connects(VertexId::new(10), VertexId::new(30)));
    }
}
