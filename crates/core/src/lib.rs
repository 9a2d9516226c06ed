//! GraphWalker Core Library
//!
//! Builds adjacency representations from undirected edge lists and walks
//! them breadth-first or depth-first.
//!
//! A caller first builds an [`AdjacencyMatrix`] or [`AdjacencyList`] from
//! raw edges, then hands the list to [`bfs`] or [`dfs`]. Representations are
//! read-only once built; traversal state is created per call.

pub mod bfs;
pub mod dfs;
pub mod edgelist;
pub mod error;
pub mod graph;
pub mod list;
pub mod matrix;
pub mod observe;

// Re-export commonly used types
pub use dfs::Coverage;
pub use error::{GraphError, GraphResult};
pub use graph::{edges_from, Edge, Vertex};
pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;
pub use observe::{LogObserver, NoopObserver, RecordingObserver, TraversalKind, TraversalObserver};
