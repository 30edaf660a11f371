use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::{Edge, Graph};
use crate::Result;

/// Result of a spanning forest algorithm execution
#[derive(Debug, Clone)]
pub struct SpanningForest<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Ord + Hash + Debug,
{
    /// Edges of the forest, each oriented from the tree towards the node it reached
    pub edges: Vec<Edge<V, W>>,

    /// Number of trees, one per connected component (isolated nodes included)
    pub tree_count: usize,
}

impl<V, W> SpanningForest<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Ord + Hash + Debug,
{
    /// Number of edges in the forest
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct nodes touched by at least one forest edge
    pub fn nodes(&self) -> HashSet<&V> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.start(), edge.end()])
            .collect()
    }

    /// Number of distinct nodes touched by the forest edges
    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .filter_map(|edge| edge.label())
            .fold(W::zero(), |acc, weight| acc + *weight)
    }

    /// Returns true if an edge joins `a` and `b` in either orientation
    pub fn connects(&self, a: &V, b: &V) -> bool {
        self.edges.iter().any(|edge| {
            (edge.start() == a && edge.end() == b) || (edge.start() == b && edge.end() == a)
        })
    }
}

/// Trait for minimum spanning forest algorithms
pub trait SpanningForestAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Ord + Hash + Debug,
    G: Graph<V, W>,
{
    /// Compute a minimum spanning forest of the graph
    fn compute_spanning_forest(&self, graph: &G) -> Result<SpanningForest<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
