//! Spanning Forest - Minimum Spanning Forests with Prim's Algorithm
//!
//! This library provides a generic adjacency-map graph, an indexed binary
//! min-heap supporting removal of arbitrary elements, and Prim's algorithm
//! composed from the two to compute a minimum spanning forest (one minimum
//! spanning tree per connected component) of an undirected weighted graph.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    prim::{minimum_spanning_forest, Prim},
    SpanningForest, SpanningForestAlgorithm,
};
/// Re-export main types for convenient use
pub use data_structures::IndexedPriorityQueue;
pub use graph::{AdjacencyGraph, Edge};

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Element not found in the priority queue")]
    ElementNotFound,

    #[error("Minimum spanning forests require an undirected graph")]
    DirectedGraph,

    #[error("Minimum spanning forests require a labelled (weighted) graph")]
    UnlabelledGraph,

    #[error("Edge from {from} to {to} has no weight")]
    MissingWeight { from: String, to: String },

    #[error("Error reading file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid weight {value:?} on line {line}")]
    InvalidWeight { line: usize, value: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
