//! Traversal observability hooks
//!
//! Traversals report each visited vertex and each recoverable failure to a
//! [`TraversalObserver`]. The default [`LogObserver`] forwards to the `log`
//! facade; callers can inject their own observer to collect events or pass
//! [`NoopObserver`] to silence output.

use crate::error::GraphError;
use crate::graph::Vertex;

/// Which traversal produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    BreadthFirst,
    DepthFirst,
}

/// Receives per-visit events from a traversal
pub trait TraversalObserver<V: Vertex> {
    /// Called once per vertex, in output order
    fn on_visit(&mut self, kind: TraversalKind, vertex: &V);

    /// Called when a neighbor is skipped after a recoverable failure
    fn on_neighbor_error(&mut self, error: &GraphError);
}

/// Forwards events to the `log` facade
///
/// Visits are logged at `debug`, skipped neighbors at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<V: Vertex> TraversalObserver<V> for LogObserver {
    fn on_visit(&mut self, kind: TraversalKind, vertex: &V) {
        match kind {
            TraversalKind::BreadthFirst => log::debug!("BFS visiting node {:?}", vertex),
            TraversalKind::DepthFirst => log::debug!("DFS visiting node {:?}", vertex),
        }
    }

    fn on_neighbor_error(&mut self, error: &GraphError) {
        log::warn!("Skipping neighbor: {}", error);
    }
}

/// Discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<V: Vertex> TraversalObserver<V> for NoopObserver {
    fn on_visit(&mut self, _kind: TraversalKind, _vertex: &V) {}

    fn on_neighbor_error(&mut self, _error: &GraphError) {}
}

/// Keeps every event in memory for later inspection
#[derive(Debug, Clone)]
pub struct RecordingObserver<V> {
    pub visits: Vec<(TraversalKind, V)>,
    pub errors: Vec<GraphError>,
}

impl<V> RecordingObserver<V> {
    pub fn new() -> Self {
        Self {
            visits: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Visited vertices without their traversal kind
    pub fn visited(&self) -> Vec<&V> {
        self.visits.iter().map(|(_, v)| v).collect()
    }
}

impl<V> Default for RecordingObserver<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> TraversalObserver<V> for RecordingObserver<V> {
    fn on_visit(&mut self, kind: TraversalKind, vertex: &V) {
        self.visits.push((kind, vertex.clone()));
    }

    fn on_neighbor_error(&mut self, error: &GraphError) {
        self.errors.push(error.clone());
    }
}
