//! Line-oriented edge list reader
//!
//! Each line describes one undirected edge as `<from>-<weight>-<to>`, e.g.
//! `Detroit-1-Cleveland`. Blank lines and lines without both delimiters are
//! skipped silently; lines whose weight is not a non-negative integer are
//! skipped with a warning. Surrounding whitespace on each field is ignored,
//! so vertex names may contain inner spaces but not `-`.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_dijkstra::graph::Graph;
//!
//! let text = "Chicago-2-Detroit\n\nDetroit-1-Cleveland\n";
//! let graph = Graph::from_edge_list(text.as_bytes()).unwrap();
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::error::GraphError;
use crate::graph::{Graph, GraphBuilder};

/// One parsed `<from>-<weight>-<to>` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub weight: i64,
    pub to: String,
}

/// Failure while loading a graph from an edge list
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),

    #[error("invalid edge on line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// Parses a single edge line.
///
/// Returns `None` for blank lines, lines missing a delimiter, lines with an
/// empty endpoint and lines whose weight does not parse.
pub fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut fields = line.splitn(3, '-');
    let (from, weight, to) = match (fields.next(), fields.next(), fields.next()) {
        (Some(from), Some(weight), Some(to)) => (from.trim(), weight.trim(), to.trim()),
        _ => {
            debug!(line, "skipping edge line without two delimiters");
            return None;
        }
    };

    if from.is_empty() || to.is_empty() {
        debug!(line, "skipping edge line with an empty endpoint");
        return None;
    }

    match weight.parse::<u32>() {
        Ok(weight) => Some(EdgeRecord {
            from: from.to_owned(),
            weight: i64::from(weight),
            to: to.to_owned(),
        }),
        Err(err) => {
            warn!(line, %err, "skipping edge line with unparsable weight");
            None
        }
    }
}

/// Reads every well-formed edge from `reader`, in input order.
pub fn read_edge_list<R: BufRead>(reader: R) -> io::Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = parse_edge_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}

impl Graph {
    /// Builds a graph from an edge list, registering vertex names in order of
    /// first appearance.
    pub fn from_edge_list<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
        let mut builder = GraphBuilder::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = parse_edge_line(&line) {
                builder
                    .edge(&record.from, &record.to, record.weight)
                    .map_err(|source| LoadError::Graph {
                        line: index + 1,
                        source,
                    })?;
            }
        }
        Ok(builder.build())
    }
}
