//! Reading graphs from delimited text and summarising spanning forests.

pub mod loader;
pub mod report;

pub use loader::{load_graph, read_graph, LoaderConfig};
pub use report::{ForestReport, ReportFormat};
