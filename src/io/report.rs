use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use num_traits::Float;
use serde::Serialize;

use crate::algorithm::SpanningForest;
use crate::Result;

/// Output format for a forest summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// `nodes: <n>, edges: <m>, total distance: <km> km`
    #[default]
    Text,
    /// A JSON object with the same figures
    Json,
}

/// Summary of a spanning forest whose weights are distances in meters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestReport {
    /// Distinct nodes touched by forest edges
    pub nodes: usize,
    /// Number of forest edges
    pub edges: usize,
    /// Number of trees in the forest
    pub trees: usize,
    /// Sum of edge weights in meters
    pub total_distance_m: f64,
}

impl ForestReport {
    pub fn from_forest<V, W>(forest: &SpanningForest<V, W>) -> Self
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Ord + Hash + Debug,
    {
        ForestReport {
            nodes: forest.node_count(),
            edges: forest.edge_count(),
            trees: forest.tree_count,
            total_distance_m: forest.total_weight().to_f64().unwrap_or(f64::NAN),
        }
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_m / 1000.0
    }

    /// Renders the report in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Display for ForestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes: {}, edges: {}, total distance: {:.3} km",
            self.nodes,
            self.edges,
            self.total_distance_km()
        )
    }
}
