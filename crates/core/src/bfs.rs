//! Breadth-first traversal over an adjacency list

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::error::{GraphError, GraphResult};
use crate::graph::Vertex;
use crate::list::AdjacencyList;
use crate::observe::{LogObserver, TraversalKind, TraversalObserver};

/// Result of a breadth-first search for a target vertex
///
/// The traversal always runs to completion. `found_at` is the target's
/// position in `order`, if it was reached at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<V> {
    pub order: Vec<V>,
    pub target: V,
    pub found_at: Option<usize>,
}

impl<V> SearchOutcome<V> {
    pub fn found(&self) -> bool {
        self.found_at.is_some()
    }
}

/// Vertices reachable from `source`, in breadth-first order
///
/// Each visit is logged at `debug` level. Use [`breadth_first_with`] to
/// supply a different observer.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `source` has no adjacency entry.
///
/// # Example
/// ```
/// use graph_walker_core::{bfs, edges_from, AdjacencyList};
///
/// let adj = AdjacencyList::build(&edges_from(&[(0, 1), (0, 2), (1, 3)]));
/// assert_eq!(bfs::breadth_first(&0, &adj).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub fn breadth_first<V: Vertex>(source: &V, adj: &AdjacencyList<V>) -> GraphResult<Vec<V>> {
    breadth_first_with(source, adj, &mut LogObserver)
}

/// Breadth-first traversal reporting to the given observer
///
/// Vertices are marked visited when enqueued, so none is queued twice.
/// Neighbors are expanded in adjacency-list order. A reached vertex with no
/// adjacency entry of its own is still emitted, reported to the observer,
/// and contributes no further neighbors.
pub fn breadth_first_with<V, O>(
    source: &V,
    adj: &AdjacencyList<V>,
    observer: &mut O,
) -> GraphResult<Vec<V>>
where
    V: Vertex,
    O: TraversalObserver<V> + ?Sized,
{
    if !adj.contains(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let mut visited: HashSet<V> = HashSet::new();
    // Each queued vertex carries the vertex it was discovered from
    let mut queue: VecDeque<(V, Option<V>)> = VecDeque::new();
    let mut order: Vec<V> = Vec::new();

    visited.insert(source.clone());
    queue.push_back((source.clone(), None));

    while let Some((current, parent)) = queue.pop_front() {
        observer.on_visit(TraversalKind::BreadthFirst, &current);

        match adj.neighbors(&current) {
            Some(neighbors) => {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back((neighbor.clone(), Some(current.clone())));
                    }
                }
            }
            None => {
                if let Some(parent) = parent {
                    observer.on_neighbor_error(&GraphError::neighbor_lookup(&parent, &current));
                }
            }
        }

        order.push(current);
    }

    Ok(order)
}

/// Full breadth-first traversal that also reports when `target` was visited
///
/// There is no early exit: the complete order is always returned.
pub fn breadth_first_search<V, O>(
    source: &V,
    target: &V,
    adj: &AdjacencyList<V>,
    observer: &mut O,
) -> GraphResult<SearchOutcome<V>>
where
    V: Vertex,
    O: TraversalObserver<V> + ?Sized,
{
    let order = breadth_first_with(source, adj, observer)?;
    let found_at = order.iter().position(|v| v == target);

    Ok(SearchOutcome {
        order,
        target: target.clone(),
        found_at,
    })
}
