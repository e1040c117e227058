//! Shared fixtures for integration tests

#![allow(dead_code)]

use rust_indexed_dijkstra::{Graph, GraphError};

/// Cities of the worked routing example, in handle order
pub const CITIES: [&str; 9] = [
    "New York",
    "Boston",
    "Philadelphia",
    "Washington",
    "Atlanta",
    "Chicago",
    "Detroit",
    "Cleveland",
    "Pittsburgh",
];

/// Road segments of the worked routing example
pub const ROADS: [(&str, &str, i64); 14] = [
    ("New York", "Boston", 4),
    ("New York", "Cleveland", 8),
    ("Boston", "Philadelphia", 8),
    ("Boston", "Cleveland", 11),
    ("Philadelphia", "Washington", 7),
    ("Philadelphia", "Pittsburgh", 2),
    ("Philadelphia", "Chicago", 4),
    ("Washington", "Atlanta", 9),
    ("Washington", "Chicago", 14),
    ("Atlanta", "Chicago", 10),
    ("Chicago", "Detroit", 2),
    ("Detroit", "Cleveland", 1),
    ("Detroit", "Pittsburgh", 6),
    ("Cleveland", "Pittsburgh", 7),
];

/// Expected distances from Detroit
pub const FROM_DETROIT: [(&str, u64); 9] = [
    ("New York", 9),
    ("Boston", 12),
    ("Philadelphia", 6),
    ("Washington", 13),
    ("Atlanta", 12),
    ("Chicago", 2),
    ("Detroit", 0),
    ("Cleveland", 1),
    ("Pittsburgh", 6),
];

/// Builds the nine-city road network.
pub fn city_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::with_names(CITIES)?;
    for (a, b, weight) in ROADS {
        graph.add_edge_by_name(a, b, weight)?;
    }
    Ok(graph)
}

/// The road network in `<from>-<weight>-<to>` text form.
pub fn city_edge_list() -> String {
    ROADS
        .iter()
        .map(|(a, b, w)| format!("{a}-{w}-{b}\n"))
        .collect()
}

/// Linear congruential generator for reproducible random graphs
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    pub fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Bellman-Ford reference distances for an edge list over `n` vertices.
pub fn reference_distances(n: usize, edges: &[(usize, usize, u32)], source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; n];
    dist[source] = Some(0);
    for _ in 0..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            for (a, b) in [(u, v), (v, u)] {
                if let Some(da) = dist[a] {
                    let candidate = da + u64::from(w);
                    if dist[b].map_or(true, |db| candidate < db) {
                        dist[b] = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}
