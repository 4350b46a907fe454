//! Parquet to JSON export module
//!
//! This module contains the export engine, its configuration, the output
//! lock and run statistics.

pub mod config;
pub mod engine;
pub mod lock;
pub mod stats;

pub use config::{ExportConfig, InputPaths, ValuePolicy};

pub use engine::{ExportReport, Exporter, LoadedTable, LoadedTables};

pub use stats::{ExportStatistics, TableStatistics};
