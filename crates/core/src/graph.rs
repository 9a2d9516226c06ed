//! Core graph data model: vertices and undirected edges
//!
//! Vertices are opaque identifiers. Anything with well-defined equality
//! and hashing qualifies, so both `usize` and `String` graphs are supported
//! by the list builder and traversals. Only the matrix builder is restricted
//! to dense integer indices.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// An opaque vertex identifier
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// An undirected edge between two vertices
///
/// Edge order `(v1, v2)` carries no direction. Both builders record the
/// connection symmetrically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    pub v1: V,
    pub v2: V,
}

impl<V> Edge<V> {
    /// Create an edge between two vertices
    pub fn new(v1: V, v2: V) -> Self {
        Self { v1, v2 }
    }
}

impl<V: PartialEq> Edge<V> {
    /// True when both endpoints are the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((v1, v2): (V, V)) -> Self {
        Self { v1, v2 }
    }
}

/// Convert a slice of tuples into edges
///
/// Convenience for tests and callers holding literal edge lists.
pub fn edges_from<V: Clone>(pairs: &[(V, V)]) -> Vec<Edge<V>> {
    pairs.iter().cloned().map(Edge::from).collect()
}
