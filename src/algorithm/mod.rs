pub mod traits;
pub mod prim;

pub use traits::{SpanningForest, SpanningForestAlgorithm};
