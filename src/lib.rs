//! Shortest paths over named, weighted, undirected graphs
//!
//! This crate computes single-source shortest paths with Dijkstra's algorithm
//! driven by an indexed binary min-heap that supports O(log n) `decrease_key`.
//!
//! # Components
//!
//! - [`names::NameIndex`]: bidirectional name ↔ handle mapping
//! - [`graph::Graph`]: adjacency lists over dense vertex handles, with
//!   [`graph::GraphBuilder`] for building from name triples
//! - [`heap::IndexedMinHeap`]: binary min-heap with a position table for
//!   O(1) membership and O(log n) key decrease
//! - [`dijkstra::ShortestPathEngine`]: the relaxation loop tying them together
//! - [`parse`] and [`report`]: edge-list input and result output
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::{shortest_paths_from_name, Graph};
//!
//! let mut graph = Graph::with_names(["Chicago", "Detroit", "Cleveland", "Pittsburgh"]).unwrap();
//! graph.add_edge_by_name("Chicago", "Detroit", 2).unwrap();
//! graph.add_edge_by_name("Detroit", "Cleveland", 1).unwrap();
//! graph.add_edge_by_name("Detroit", "Pittsburgh", 6).unwrap();
//! graph.add_edge_by_name("Cleveland", "Pittsburgh", 7).unwrap();
//!
//! let paths = shortest_paths_from_name(&graph, "Detroit").unwrap();
//! let pittsburgh = graph.resolve("Pittsburgh").unwrap();
//! assert_eq!(paths.distance(pittsburgh), Some(6));
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod heap;
pub mod names;
pub mod parse;
pub mod report;

pub use dijkstra::{
    shortest_paths_from, shortest_paths_from_name, ShortestPathEngine, ShortestPaths,
};
pub use error::{GraphError, Result, VertexKey};
pub use graph::{Graph, GraphBuilder, VertexId, Weight};
pub use heap::{Distance, IndexedMinHeap, INFINITY};
pub use names::NameIndex;
pub use report::{DistanceSink, TableWriter};
