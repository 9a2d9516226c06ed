//! Dense adjacency matrix builder
//!
//! Vertices are addressed by index in `[0, n)`. Every endpoint is validated
//! before the matrix is filled, so a bad edge never yields a partially
//! written matrix.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;

/// Square 0/1 table of pairwise connectivity
///
/// Symmetric by construction. The diagonal is zero unless a self-loop
/// edge was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    rows: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Build an `n × n` matrix from an undirected edge collection
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] for the first edge endpoint that is
    /// not below `vertex_count`.
    ///
    /// # Example
    /// ```
    /// use graph_walker_core::{edges_from, AdjacencyMatrix};
    ///
    /// let matrix = AdjacencyMatrix::build(&edges_from(&[(1, 2)]), 5).unwrap();
    /// assert_eq!(matrix.get(1, 2).unwrap(), 1);
    /// assert_eq!(matrix.get(2, 1).unwrap(), 1);
    /// assert_eq!(matrix.get(0, 0).unwrap(), 0);
    /// ```
    pub fn build(edges: &[Edge<usize>], vertex_count: usize) -> GraphResult<Self> {
        for edge in edges {
            check_index(edge.v1, vertex_count)?;
            check_index(edge.v2, vertex_count)?;
        }

        let mut rows = vec![vec![0u8; vertex_count]; vertex_count];
        for edge in edges {
            rows[edge.v1][edge.v2] = 1;
            rows[edge.v2][edge.v1] = 1;
        }

        log::debug!(
            "Built {}x{} adjacency matrix from {} edges",
            vertex_count,
            vertex_count,
            edges.len()
        );

        Ok(Self { vertex_count, rows })
    }

    /// Number of vertices (the matrix is `n × n`)
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Entry `[i][j]`, bounds-checked
    pub fn get(&self, i: usize, j: usize) -> GraphResult<u8> {
        check_index(i, self.vertex_count)?;
        check_index(j, self.vertex_count)?;
        Ok(self.rows[i][j])
    }

    /// Whether an edge connects `i` and `j`
    pub fn is_adjacent(&self, i: usize, j: usize) -> GraphResult<bool> {
        self.get(i, j).map(|entry| entry == 1)
    }

    /// Borrow the raw rows
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of distinct neighbors of vertex `i` (a self-loop counts once)
    pub fn degree(&self, i: usize) -> GraphResult<usize> {
        check_index(i, self.vertex_count)?;
        Ok(self.rows[i].iter().filter(|&&entry| entry == 1).count())
    }

    /// Check `M[i][j] == M[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.vertex_count)
            .all(|i| (i + 1..self.vertex_count).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Recover the edge set from the upper triangle (diagonal included)
    ///
    /// Duplicate input edges collapse, so this is the distinct connectivity
    /// of the matrix in row-major order.
    pub fn to_edges(&self) -> Vec<Edge<usize>> {
        let mut edges = Vec::new();
        for i in 0..self.vertex_count {
            for j in i..self.vertex_count {
                if self.rows[i][j] == 1 {
                    edges.push(Edge::new(i, j));
                }
            }
        }
        edges
    }
}

fn check_index(vertex: usize, vertex_count: usize) -> GraphResult<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::OutOfRange {
            vertex,
            vertex_count,
        })
    }
}
