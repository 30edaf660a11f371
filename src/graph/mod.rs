pub mod traits;
pub mod edge;
pub mod adjacency;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use edge::Edge;
pub use adjacency::AdjacencyGraph;
