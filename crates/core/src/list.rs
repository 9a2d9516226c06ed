//! Adjacency list builder
//!
//! Maps each vertex to its neighbors in edge-insertion order. Keys are kept
//! in first-seen order as well, so iterating the list is deterministic even
//! though lookups go through a `HashMap`.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::{Edge, Vertex};
use crate::matrix::AdjacencyMatrix;

/// Mapping from vertex to its ordered neighbor sequence
///
/// Built lists are symmetric: `w` appears in `adj[v]` iff `v` appears in
/// `adj[w]`. Lists created with [`AdjacencyList::from_entries`] may be
/// asymmetric and may reference neighbors that have no entry of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList<V: Vertex> {
    entries: HashMap<V, Vec<V>>,
    order: Vec<V>,
}

impl<V: Vertex> AdjacencyList<V> {
    /// Create an empty adjacency list
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Build an undirected adjacency list from an edge collection
    ///
    /// For every edge `(v1, v2)`, `v2` is appended to `adj[v1]` and `v1` to
    /// `adj[v2]`. Duplicate edges produce duplicate neighbors and a self-loop
    /// lists the vertex twice under its own key.
    ///
    /// # Example
    /// ```
    /// use graph_walker_core::{edges_from, AdjacencyList};
    ///
    /// let adj = AdjacencyList::build(&edges_from(&[("a", "b"), ("a", "c")]));
    /// assert_eq!(adj.neighbors(&"a"), Some(&["b", "c"][..]));
    /// assert_eq!(adj.neighbors(&"c"), Some(&["a"][..]));
    /// ```
    pub fn build(edges: &[Edge<V>]) -> Self {
        let mut adj = Self::new();
        for edge in edges {
            adj.push_neighbor(edge.v1.clone(), edge.v2.clone());
            adj.push_neighbor(edge.v2.clone(), edge.v1.clone());
        }
        log::debug!(
            "Built adjacency list with {} vertices from {} edges",
            adj.len(),
            edges.len()
        );
        adj
    }

    /// Build from edges after pre-seeding vertices that may have no edges
    ///
    /// Seeded vertices keep their given order ahead of vertices first seen
    /// in `edges`.
    pub fn with_vertices(vertices: &[V], edges: &[Edge<V>]) -> Self {
        let mut adj = Self::new();
        for vertex in vertices {
            adj.entry(vertex.clone());
        }
        for edge in edges {
            adj.push_neighbor(edge.v1.clone(), edge.v2.clone());
            adj.push_neighbor(edge.v2.clone(), edge.v1.clone());
        }
        adj
    }

    /// Take a hand-written mapping as-is, without symmetrizing it
    ///
    /// Repeated keys extend the earlier entry.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, Vec<V>)>,
    {
        let mut adj = Self::new();
        for (vertex, neighbors) in entries {
            adj.entry(vertex).extend(neighbors);
        }
        adj
    }

    fn entry(&mut self, vertex: V) -> &mut Vec<V> {
        if !self.entries.contains_key(&vertex) {
            self.order.push(vertex.clone());
        }
        self.entries.entry(vertex).or_default()
    }

    fn push_neighbor(&mut self, vertex: V, neighbor: V) {
        self.entry(vertex).push(neighbor);
    }

    /// Neighbors of `vertex` in insertion order, `None` if it has no entry
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.entries.get(vertex).map(|v| v.as_slice())
    }

    /// Whether `vertex` is a key of the mapping
    pub fn contains(&self, vertex: &V) -> bool {
        self.entries.contains_key(vertex)
    }

    /// Keys in first-seen order
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// `(vertex, neighbors)` pairs in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.order
            .iter()
            .map(move |v| (v, self.entries[v].as_slice()))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check that every neighbor relation is mirrored with equal multiplicity
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(v, neighbors)| {
            neighbors.iter().all(|w| {
                let forward = neighbors.iter().filter(|&x| x == w).count();
                let backward = self
                    .neighbors(w)
                    .map(|back| back.iter().filter(|&x| x == v).count())
                    .unwrap_or(0);
                forward == backward
            })
        })
    }

    /// Export to an undirected `petgraph` graph
    ///
    /// Nodes are added in first-seen key order, followed by any neighbors
    /// that lack an entry. Each distinct vertex pair becomes one edge, so
    /// duplicate edges collapse.
    pub fn to_petgraph(&self) -> UnGraph<V, ()> {
        let mut graph = UnGraph::new_undirected();
        let mut indices: HashMap<V, NodeIndex> = HashMap::with_capacity(self.len());

        for vertex in &self.order {
            indices.insert(vertex.clone(), graph.add_node(vertex.clone()));
        }

        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
        for (vertex, neighbors) in self.iter() {
            let from = indices[vertex];
            for neighbor in neighbors {
                let to = match indices.get(neighbor) {
                    Some(&idx) => idx,
                    None => {
                        let idx = graph.add_node(neighbor.clone());
                        indices.insert(neighbor.clone(), idx);
                        idx
                    }
                };
                let key = if from <= to { (from, to) } else { (to, from) };
                if seen.insert(key) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        graph
    }
}

impl AdjacencyList<usize> {
    /// Rebuild the connectivity of a matrix as an index-keyed list
    ///
    /// Only distinct connections survive, since the matrix does not record
    /// edge multiplicity.
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        Self::build(&matrix.to_edges())
    }
}

impl<V: Vertex> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}
