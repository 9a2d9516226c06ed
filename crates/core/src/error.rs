//! Error types for graph construction and traversal.

use thiserror::Error;

/// All errors that can occur while building or walking a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A matrix endpoint fell outside `[0, vertex_count)`.
    #[error("Vertex index {vertex} out of range for {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// The traversal source has no adjacency entry.
    #[error("Vertex {vertex} not found in adjacency list")]
    VertexNotFound { vertex: String },

    /// A neighbor reached during depth-first exploration has no adjacency entry.
    #[error("Neighbor {neighbor} of vertex {vertex} has no adjacency entry")]
    NeighborLookup { vertex: String, neighbor: String },
}

impl GraphError {
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    pub(crate) fn neighbor_lookup(
        vertex: &impl std::fmt::Debug,
        neighbor: &impl std::fmt::Debug,
    ) -> Self {
        GraphError::NeighborLookup {
            vertex: format!("{:?}", vertex),
            neighbor: format!("{:?}", neighbor),
        }
    }

    /// Whether traversal may skip past this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GraphError::NeighborLookup { .. })
    }
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
