//! Single-source shortest paths with Dijkstra's algorithm
//!
//! The engine seeds an [`IndexedMinHeap`] with every vertex of the graph (the
//! source at zero, everything else at [`INFINITY`]), then repeatedly extracts
//! the closest vertex and relaxes its incident edges with `decrease_key`.
//! Each vertex is extracted exactly once, and an extracted vertex's edges are
//! never relaxed again.
//!
//! Edge weights are non-negative by construction ([`Weight`] is unsigned),
//! which is what makes a vertex's distance final at the moment it is
//! extracted.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::dijkstra::shortest_paths_from_name;
//! use rust_indexed_dijkstra::graph::Graph;
//!
//! let graph = Graph::from_triples([
//!     ("Chicago", "Detroit", 2),
//!     ("Detroit", "Cleveland", 1),
//!     ("Chicago", "Cleveland", 5),
//! ])
//! .unwrap();
//!
//! let paths = shortest_paths_from_name(&graph, "Chicago").unwrap();
//! let cleveland = graph.resolve("Cleveland").unwrap();
//! assert_eq!(paths.distance(cleveland), Some(3));
//! assert_eq!(paths.path_to(cleveland).unwrap().len(), 3);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};
use crate::heap::{Distance, IndexedMinHeap, INFINITY};

/// Distances and predecessors produced by one shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    /// Best distance per vertex; `INFINITY` when unreachable
    distances: Vec<Distance>,
    /// Previous vertex on a shortest path, for path reconstruction
    predecessors: Vec<Option<VertexId>>,
    settled: usize,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices covered by the result (the graph's vertex count).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the shortest distance to `vertex`, or `None` if it is unreachable
    /// (or out of range).
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        match self.distances.get(vertex) {
            Some(&d) if d != INFINITY => Some(d),
            _ => None,
        }
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source (including the source).
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Iterates `(vertex, distance)` in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<Distance>)> + '_ {
        (0..self.distances.len()).map(move |v| (v, self.distance(v)))
    }

    /// Reconstructs a shortest path from the source to `target`, inclusive.
    ///
    /// Returns `None` if `target` is unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }

    /// Raw distance table indexed by handle, using [`INFINITY`] for unreachable vertices.
    pub fn as_slice(&self) -> &[Distance] {
        &self.distances
    }
}

/// Configurable shortest-path query over a borrowed graph
///
/// ```rust
/// use rust_indexed_dijkstra::dijkstra::ShortestPathEngine;
/// use rust_indexed_dijkstra::graph::Graph;
///
/// let graph = Graph::from_triples([("A", "B", 3), ("B", "C", 4)]).unwrap();
///
/// let paths = ShortestPathEngine::new(&graph)
///     .max_distance(5)
///     .run_by_name("A")
///     .unwrap();
/// assert_eq!(paths.distance(1), Some(3));
/// assert_eq!(paths.distance(2), None); // 7 is beyond the limit
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
    max_distance: Option<Distance>,
    cancel: Option<&'g AtomicBool>,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        ShortestPathEngine {
            graph,
            max_distance: None,
            cancel: None,
        }
    }

    /// Treat vertices farther than `limit` from the source as unreachable.
    pub fn max_distance(mut self, limit: Distance) -> Self {
        self.max_distance = Some(limit);
        self
    }

    /// Abort the query with [`GraphError::Cancelled`] once `flag` is set.
    ///
    /// The flag is checked before each extraction.
    pub fn cancel_on(mut self, flag: &'g AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Runs the query from the named source vertex.
    pub fn run_by_name(self, source: &str) -> Result<ShortestPaths> {
        let source = self.graph.resolve(source)?;
        self.run(source)
    }

    /// Runs the query from `source`.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `source` is out of range
    /// - [`GraphError::Cancelled`] if the cancellation flag was raised
    pub fn run(self, source: VertexId) -> Result<ShortestPaths> {
        let graph = self.graph;
        graph.check_vertex(source)?;

        let vertex_count = graph.vertex_count();
        debug!(source, vertex_count, edges = graph.edge_count(), "shortest-path query");

        let mut distances = vec![INFINITY; vertex_count];
        let mut predecessors = vec![None; vertex_count];
        distances[source] = 0;

        let mut heap = IndexedMinHeap::from_distances(&distances);
        let mut settled = 0usize;

        while !heap.is_empty() {
            if let Some(flag) = self.cancel {
                if flag.load(Ordering::Relaxed) {
                    debug!(source, settled, "shortest-path query cancelled");
                    return Err(GraphError::Cancelled { settled });
                }
            }

            let (u, d) = heap.extract_min()?;
            if d == INFINITY {
                // Unreachable: nothing to relax
                continue;
            }
            if self.max_distance.is_some_and(|limit| d > limit) {
                distances[u] = INFINITY;
                predecessors[u] = None;
                // Whatever remains is at least as far
                while !heap.is_empty() {
                    let (v, _) = heap.extract_min()?;
                    distances[v] = INFINITY;
                    predecessors[v] = None;
                }
                break;
            }
            settled += 1;

            for (v, w) in graph.neighbors_of(u) {
                if !heap.contains(v) {
                    continue;
                }
                let candidate = relax(d, w);
                if candidate < distances[v] {
                    trace!(from = u, to = v, distance = candidate, "relaxed");
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    heap.decrease_key(v, candidate)?;
                }
            }
        }

        debug!(source, settled, "shortest-path query finished");
        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
            settled,
        })
    }
}

#[inline]
fn relax(d: Distance, w: Weight) -> Distance {
    d.saturating_add(Distance::from(w))
}

/// Computes shortest distances from `source` to every vertex of `graph`.
///
/// # Errors
/// Returns [`GraphError::InvalidVertex`] if `source` is out of range.
pub fn shortest_paths_from(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    ShortestPathEngine::new(graph).run(source)
}

/// Computes shortest distances from the named vertex.
///
/// # Errors
/// Returns [`GraphError::UnknownVertex`] if `source` is not a registered name.
pub fn shortest_paths_from_name(graph: &Graph, source: &str) -> Result<ShortestPaths> {
    ShortestPathEngine::new(graph).run_by_name(source)
}
