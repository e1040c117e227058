//! Weighted, undirected adjacency-list graph over dense vertex handles
//!
//! Each vertex owns a contiguous list of `(neighbor, weight)` edges. Adding an
//! edge always inserts both directions; all validation happens before either
//! list is touched, so a half-inserted edge is never observable.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::graph::Graph;
//!
//! let mut graph = Graph::with_names(["Chicago", "Detroit", "Cleveland"]).unwrap();
//! graph.add_edge_by_name("Chicago", "Detroit", 2).unwrap();
//! graph.add_edge_by_name("Detroit", "Cleveland", 1).unwrap();
//!
//! let detroit = graph.resolve("Detroit").unwrap();
//! assert_eq!(graph.neighbors_of(detroit).count(), 2);
//! assert_eq!(graph.edge_count(), 2);
//! ```

use smallvec::SmallVec;

use crate::error::{GraphError, Result};
use crate::names::{validate_name, NameIndex};

/// Dense vertex handle in `[0, vertex_count)`.
pub type VertexId = usize;

/// Non-negative edge weight.
pub type Weight = u32;

/// One direction of an undirected edge, stored in the source vertex's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

/// Most road-like graphs have a handful of neighbours per vertex
type EdgeList = SmallVec<[Edge; 4]>;

/// Undirected weighted graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<EdgeList>,
    names: NameIndex,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` unnamed vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![EdgeList::new(); vertex_count],
            names: NameIndex::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph with one vertex per name; handles follow the order of `names`.
    pub fn with_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = NameIndex::new();
        for name in names {
            index.register(name.as_ref())?;
        }
        Ok(Self::from_name_index(index))
    }

    /// Creates an edgeless graph covering exactly the handles of `names`.
    pub fn from_name_index(names: NameIndex) -> Self {
        Graph {
            adjacency: vec![EdgeList::new(); names.len()],
            names,
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each counted once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds the undirected edge `u -- v` with the given weight.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `u` or `v` is out of range
    /// - [`GraphError::InvalidWeight`] if `weight` is negative or exceeds [`Weight::MAX`]
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: i64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let weight = checked_weight(weight)?;

        self.adjacency[u].push(Edge { to: v, weight });
        self.adjacency[v].push(Edge { to: u, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Adds the undirected edge between two named vertices.
    ///
    /// Both names are resolved before anything is inserted.
    pub fn add_edge_by_name(&mut self, a: &str, b: &str, weight: i64) -> Result<()> {
        let u = self.names.resolve(a)?;
        let v = self.names.resolve(b)?;
        self.add_edge(u, v, weight)
    }

    /// Iterates the edges incident to `u` as `(neighbor, weight)`.
    ///
    /// # Panics
    /// Panics if `u` is out of range; use [`Graph::try_neighbors_of`] for
    /// unvalidated handles.
    pub fn neighbors_of(&self, u: VertexId) -> Neighbors<'_> {
        Neighbors {
            edges: self.adjacency[u].iter(),
        }
    }

    /// Like [`Graph::neighbors_of`], but reports out-of-range handles as an error.
    pub fn try_neighbors_of(&self, u: VertexId) -> Result<Neighbors<'_>> {
        self.check_vertex(u)?;
        Ok(self.neighbors_of(u))
    }

    pub fn degree(&self, u: VertexId) -> usize {
        self.adjacency.get(u).map_or(0, |edges| edges.len())
    }

    /// Looks up the handle of a named vertex.
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.names.resolve(name)
    }

    /// Returns the display name of `u`, if the vertex was named.
    pub fn name_of(&self, u: VertexId) -> Option<&str> {
        self.names.name_of(u)
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    /// Returns an error unless `u` is a valid handle for this graph.
    pub fn check_vertex(&self, u: VertexId) -> Result<()> {
        if u < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: u,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Builds a graph from `(name, name, weight)` triples, registering names on first sight.
    pub fn from_triples<I, S>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, i64)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new();
        for (a, b, weight) in triples {
            builder.edge(a.as_ref(), b.as_ref(), weight)?;
        }
        Ok(builder.build())
    }
}

pub(crate) fn checked_weight(weight: i64) -> Result<Weight> {
    Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight(weight))
}

/// Iterator over the edges incident to one vertex
///
/// Calling [`Graph::neighbors_of`] again walks the same edges in the same
/// order; adding edges only appends to the end.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    edges: std::slice::Iter<'a, Edge>,
}

impl Iterator for Neighbors<'_> {
    type Item = (VertexId, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|edge| (edge.to, edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

/// Collects named edges in any order and produces a [`Graph`]
///
/// Vertices are registered the first time their name appears, so handles
/// follow first-appearance order. Names can also be declared up front with
/// [`GraphBuilder::vertex`] to fix their handles or to add isolated vertices.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: NameIndex,
    edges: Vec<(VertexId, VertexId, Weight)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a vertex, returning its handle. Declaring a known name is a no-op.
    pub fn vertex(&mut self, name: &str) -> Result<VertexId> {
        match self.names.resolve(name) {
            Ok(handle) => Ok(handle),
            Err(_) => self.names.register(name),
        }
    }

    /// Records the undirected edge `a -- b`.
    ///
    /// The weight and both names are validated before either name is registered.
    pub fn edge(&mut self, a: &str, b: &str, weight: i64) -> Result<&mut Self> {
        let weight = checked_weight(weight)?;
        validate_name(a)?;
        validate_name(b)?;
        let u = self.vertex(a)?;
        let v = self.vertex(b)?;
        self.edges.push((u, v, weight));
        Ok(self)
    }

    pub fn build(self) -> Graph {
        let mut graph = Graph::from_name_index(self.names);
        for (u, v, weight) in self.edges {
            graph.adjacency[u].push(Edge { to: v, weight });
            graph.adjacency[v].push(Edge { to: u, weight });
            graph.edge_count += 1;
        }
        graph
    }
}
