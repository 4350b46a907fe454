//! GraphRAG table exporter
//!
//! Reads the communities, entities and relationships Parquet tables written
//! by a GraphRAG indexing run, keeps an allow-listed subset of columns from
//! each, and writes `communities.json` and `graph.json` for the web backend.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{ExportConfig, ExportReport, Exporter, InputPaths, ValuePolicy};
pub use error::{ExportError, ExportErrorKind, ExportResult};
pub use formatter::{CommunitiesDocument, GraphDocument, Record};
pub use parser::{TableKind, TableSource};

/// Export with the default paths and allow-lists
pub fn export_graph() -> ExportResult<ExportReport> {
    export_graph_with_config(ExportConfig::default())
}

/// Export with a custom configuration
pub fn export_graph_with_config(config: ExportConfig) -> ExportResult<ExportReport> {
    Exporter::new(config).export()
}
