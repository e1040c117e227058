//! Handing query results to consumers
//!
//! A [`DistanceSink`] receives one `(vertex name, distance)` pair per vertex,
//! in ascending handle order, with `None` marking unreachable vertices.
//! Unnamed vertices are reported as `#<handle>`.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::dijkstra::ShortestPaths;
use crate::graph::{Graph, VertexId};
use crate::heap::Distance;

/// Consumer of per-vertex query results
pub trait DistanceSink {
    /// Receives the result for one vertex.
    fn accept(&mut self, name: &str, distance: Option<Distance>) -> io::Result<()>;
}

impl DistanceSink for Vec<(String, Option<Distance>)> {
    fn accept(&mut self, name: &str, distance: Option<Distance>) -> io::Result<()> {
        self.push((name.to_owned(), distance));
        Ok(())
    }
}

/// Writes results as a two-column text table
///
/// ```text
/// Vertex          Distance from Source
/// Detroit         0
/// Gotham          INF
/// ```
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    out: W,
    wrote_header: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        TableWriter {
            out,
            wrote_header: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DistanceSink for TableWriter<W> {
    fn accept(&mut self, name: &str, distance: Option<Distance>) -> io::Result<()> {
        if !self.wrote_header {
            writeln!(self.out, "{:<15} Distance from Source", "Vertex")?;
            self.wrote_header = true;
        }
        match distance {
            Some(d) => writeln!(self.out, "{name:<15} {d}"),
            None => writeln!(self.out, "{name:<15} INF"),
        }
    }
}

impl ShortestPaths {
    /// Feeds every vertex's result to `sink` in ascending handle order.
    pub fn export<S: DistanceSink + ?Sized>(&self, graph: &Graph, sink: &mut S) -> io::Result<()> {
        for (vertex, distance) in self.iter() {
            sink.accept(&display_name(graph, vertex), distance)?;
        }
        Ok(())
    }

    /// Collects `(name, distance)` pairs in ascending handle order.
    pub fn named_distances(&self, graph: &Graph) -> Vec<(String, Option<Distance>)> {
        self.iter()
            .map(|(vertex, distance)| (display_name(graph, vertex).into_owned(), distance))
            .collect()
    }
}

fn display_name(graph: &Graph, vertex: VertexId) -> Cow<'_, str> {
    match graph.name_of(vertex) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("#{vertex}")),
    }
}
