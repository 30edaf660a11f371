use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::{debug, info};
use ordered_float::OrderedFloat;

use crate::graph::{AdjacencyGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Undirected graph of named places joined by distances in meters
pub type DistanceGraph = AdjacencyGraph<String, OrderedFloat<f64>>;

/// Configuration for reading `<nodeA><delim><nodeB><delim><weight>` records
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field separator
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Opens `path` and builds a graph from its records
pub fn load_graph(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<DistanceGraph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loading graph from {}", path.display());
    read_graph(BufReader::new(file), config)
}

/// Builds an undirected labelled graph, one edge record per line.
///
/// Lines that do not split into exactly three fields are skipped. A weight
/// that is not a number aborts the load. Repeated edges keep the first weight.
pub fn read_graph<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<DistanceGraph> {
    let mut graph = DistanceGraph::undirected_labelled();
    let mut skipped = 0usize;
    let mut rejected = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let mut fields: Vec<&str> = line.split(config.delimiter).map(str::trim).collect();
        // Trailing empty fields do not count
        while fields.last().map_or(false, |field| field.is_empty()) {
            fields.pop();
        }

        let [a, b, weight] = fields.as_slice() else {
            if !line.trim().is_empty() {
                debug!("Skipping malformed line {}: {:?}", line_number, line);
            }
            skipped += 1;
            continue;
        };

        let weight: f64 = weight.parse().map_err(|_| Error::InvalidWeight {
            line: line_number,
            value: weight.to_string(),
        })?;

        graph.add_node(a.to_string());
        graph.add_node(b.to_string());
        if !graph.add_edge(a.to_string(), b.to_string(), Some(OrderedFloat(weight))) {
            debug!("Ignoring edge {} - {} on line {}", a, b, line_number);
            rejected += 1;
        }
    }

    info!(
        "Loaded {} nodes and {} edges ({} lines skipped, {} edges rejected)",
        graph.num_nodes(),
        graph.num_edges(),
        skipped,
        rejected
    );

    Ok(graph)
}
