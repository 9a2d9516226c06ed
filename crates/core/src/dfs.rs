//! Depth-first traversal and full-graph ordering pass
//!
//! Exploration uses an explicit stack of `(vertex, next neighbor index)`
//! frames, which yields the same pre-order as the recursive formulation
//! without growing the call stack. All traversal state lives in a
//! [`DepthFirst`] value created per call and dropped when the call returns.
//!
//! Once a connected component is exhausted, the walk continues from the
//! first vertex of the caller's vertex collection that is still unvisited,
//! so disconnected components are chained into one sequence.
//!
//! The ordering pass guarantees full coverage only. `finish_order` records
//! post-order completion, but no cycle detection is done and neither
//! sequence is a topological order in general.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::GraphError;
use crate::graph::Vertex;
use crate::list::AdjacencyList;
use crate::observe::{LogObserver, TraversalKind, TraversalObserver};

/// Output of a depth-first walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage<V> {
    /// Vertices in the order they were first visited (pre-order)
    pub order: Vec<V>,
    /// Vertices in the order their exploration finished (post-order)
    pub finish_order: Vec<V>,
    /// Neighbors skipped because they had no adjacency entry
    pub skipped_neighbors: usize,
}

/// Per-call depth-first traversal state
pub struct DepthFirst<'a, V: Vertex, O: ?Sized> {
    adj: &'a AdjacencyList<V>,
    observer: &'a mut O,
    vertices: &'a [V],
    // Everything before `cursor` in `vertices` has been visited
    cursor: usize,
    visited: HashSet<V>,
    stack: Vec<(V, usize)>,
    order: Vec<V>,
    finish_order: Vec<V>,
    skipped_neighbors: usize,
}

impl<'a, V, O> DepthFirst<'a, V, O>
where
    V: Vertex,
    O: TraversalObserver<V> + ?Sized,
{
    /// Fresh state over `vertices` with nothing visited
    pub fn new(vertices: &'a [V], adj: &'a AdjacencyList<V>, observer: &'a mut O) -> Self {
        Self {
            adj,
            observer,
            vertices,
            cursor: 0,
            visited: HashSet::with_capacity(vertices.len()),
            stack: Vec::new(),
            order: Vec::with_capacity(vertices.len()),
            finish_order: Vec::with_capacity(vertices.len()),
            skipped_neighbors: 0,
        }
    }

    /// Whether `vertex` has been visited by this walk
    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Explore from `start`, then from each remaining vertex in turn
    ///
    /// Does nothing if `start` was already visited. A start vertex with no
    /// adjacency entry is visited as a vertex without neighbors.
    pub fn run_from(&mut self, start: &V) {
        if self.visited.contains(start) {
            return;
        }
        self.explore(start.clone());
        while let Some(next) = self.next_remaining() {
            self.explore(next);
        }
    }

    /// Finish the walk and return what it produced
    pub fn into_coverage(self) -> Coverage<V> {
        Coverage {
            order: self.order,
            finish_order: self.finish_order,
            skipped_neighbors: self.skipped_neighbors,
        }
    }

    fn next_remaining(&mut self) -> Option<V> {
        while let Some(vertex) = self.vertices.get(self.cursor) {
            if !self.visited.contains(vertex) {
                return Some(vertex.clone());
            }
            self.cursor += 1;
        }
        None
    }

    fn enter(&mut self, vertex: V) {
        self.observer.on_visit(TraversalKind::DepthFirst, &vertex);
        self.visited.insert(vertex.clone());
        self.order.push(vertex.clone());
        self.stack.push((vertex, 0));
    }

    /// Exhaust the component containing `root`
    fn explore(&mut self, root: V) {
        let adj = self.adj;
        self.enter(root);

        while let Some((vertex, next)) = self.stack.last_mut() {
            let neighbors = adj.neighbors(vertex).unwrap_or(&[]);

            let Some(neighbor) = neighbors.get(*next) else {
                if let Some((done, _)) = self.stack.pop() {
                    self.finish_order.push(done);
                }
                continue;
            };
            *next += 1;

            if self.visited.contains(neighbor) {
                continue;
            }
            if !adj.contains(neighbor) {
                let error = GraphError::neighbor_lookup(&*vertex, neighbor);
                self.skipped_neighbors += 1;
                self.observer.on_neighbor_error(&error);
                continue;
            }

            let neighbor = neighbor.clone();
            self.enter(neighbor);
        }
    }
}

/// Depth-first walk from `start`, chaining into the rest of `vertices`
///
/// Visits go to the given observer.
pub fn depth_first_from<V, O>(
    start: &V,
    vertices: &[V],
    adj: &AdjacencyList<V>,
    observer: &mut O,
) -> Coverage<V>
where
    V: Vertex,
    O: TraversalObserver<V> + ?Sized,
{
    let mut walk = DepthFirst::new(vertices, adj, observer);
    walk.run_from(start);
    walk.into_coverage()
}

/// Depth-first coverage of every vertex in `vertices`
///
/// Each vertex of the collection appears exactly once in
/// [`Coverage::order`]. Visits are logged at `debug` level and skipped
/// neighbors at `warn`.
///
/// # Example
/// ```
/// use graph_walker_core::{dfs, edges_from, AdjacencyList};
///
/// let adj = AdjacencyList::build(&edges_from(&[(0, 1), (2, 3)]));
/// let coverage = dfs::depth_first_coverage(&[0, 1, 2, 3], &adj);
/// assert_eq!(coverage.order, vec![0, 1, 2, 3]);
/// ```
pub fn depth_first_coverage<V: Vertex>(vertices: &[V], adj: &AdjacencyList<V>) -> Coverage<V> {
    depth_first_coverage_with(vertices, adj, &mut LogObserver)
}

/// Ordering pass with an injected observer
pub fn depth_first_coverage_with<V, O>(
    vertices: &[V],
    adj: &AdjacencyList<V>,
    observer: &mut O,
) -> Coverage<V>
where
    V: Vertex,
    O: TraversalObserver<V> + ?Sized,
{
    let mut walk = DepthFirst::new(vertices, adj, observer);
    for vertex in vertices {
        if !walk.is_visited(vertex) {
            walk.run_from(vertex);
        }
    }
    walk.into_coverage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{edges_from, Edge};
    use crate::observe::{NoopObserver, RecordingObserver};

    fn directed_sample() -> AdjacencyList<u32> {
        AdjacencyList::from_entries(vec![
            (0, vec![1, 3]),
            (1, vec![4]),
            (2, vec![4, 5]),
            (3, vec![1]),
            (4, vec![3]),
            (5, vec![5]),
        ])
    }

    #[test]
    fn test_disconnected_components_in_sequence() {
        let adj = AdjacencyList::build(&edges_from(&[(0, 1), (2, 3)]));
        let coverage = depth_first_coverage_with(&[0, 1, 2, 3], &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vec![0, 1, 2, 3]);
        assert_eq!(coverage.finish_order, vec![1, 0, 3, 2]);
        assert_eq!(coverage.skipped_neighbors, 0);
    }

    #[test]
    fn test_component_exhausted_before_jumping() {
        // 0 has two neighbors; 3 is in another component but listed early
        let adj = AdjacencyList::build(&edges_from(&[(0, 1), (0, 2), (3, 4)]));
        let coverage = depth_first_coverage_with(&[0, 3, 1, 2, 4], &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_preorder_matches_recursive_walk() {
        let adj = directed_sample();
        let vertices: Vec<u32> = (0..6).collect();

        let coverage = depth_first_coverage_with(&vertices, &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vec![0, 1, 4, 3, 2, 5]);
        assert_eq!(coverage.finish_order, vec![3, 4, 1, 0, 5, 2]);
    }

    #[test]
    fn test_depth_first_from_chains_remaining() {
        let adj = directed_sample();
        let vertices: Vec<u32> = (0..6).collect();

        let coverage = depth_first_from(&2, &vertices, &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vec![2, 4, 3, 1, 5, 0]);
    }

    #[test]
    fn test_missing_neighbor_is_skipped_and_reported() {
        let adj = AdjacencyList::from_entries(vec![(0, vec![7, 1]), (1, vec![0])]);
        let mut observer = RecordingObserver::new();

        let coverage = depth_first_coverage_with(&[0, 1], &adj, &mut observer);

        assert_eq!(coverage.order, vec![0, 1]);
        assert_eq!(coverage.skipped_neighbors, 1);
        assert_eq!(observer.errors, vec![GraphError::neighbor_lookup(&0, &7)]);
        assert_eq!(observer.visited(), vec![&0, &1]);
    }

    #[test]
    fn test_root_without_entry_is_visited() {
        let adj = AdjacencyList::build(&edges_from(&[(0, 1)]));
        let coverage = depth_first_coverage_with(&[0, 1, 9], &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vec![0, 1, 9]);
        assert_eq!(coverage.skipped_neighbors, 0);
    }

    #[test]
    fn test_fresh_state_per_call() {
        let adj = AdjacencyList::build(&edges_from(&[("a", "b"), ("b", "c")]));
        let vertices = ["a", "b", "c"];

        let first = depth_first_coverage_with(&vertices, &adj, &mut NoopObserver);
        let second = depth_first_coverage_with(&vertices, &adj, &mut NoopObserver);

        assert_eq!(first.order, vec!["a", "b", "c"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_vertices_visited_once() {
        let adj = AdjacencyList::build(&edges_from(&[(0, 1)]));
        let coverage = depth_first_coverage_with(&[1, 1, 0, 0], &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vec![1, 0]);
    }

    #[test]
    fn test_empty_vertex_collection() {
        let adj: AdjacencyList<u32> = AdjacencyList::new();
        let coverage = depth_first_coverage_with(&[], &adj, &mut NoopObserver);

        assert!(coverage.order.is_empty());
        assert!(coverage.finish_order.is_empty());
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let n: u32 = 200_000;
        let edges: Vec<Edge<u32>> = (0..n - 1).map(|i| Edge::new(i, i + 1)).collect();
        let adj = AdjacencyList::build(&edges);
        let vertices: Vec<u32> = (0..n).collect();

        let coverage = depth_first_coverage_with(&vertices, &adj, &mut NoopObserver);

        assert_eq!(coverage.order, vertices);
        assert_eq!(coverage.finish_order.first(), Some(&(n - 1)));
    }
}
