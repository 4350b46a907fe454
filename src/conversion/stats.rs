//! Statistics collected during an export run

use crate::parser::TableKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-table projection summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStatistics {
    pub table: TableKind,
    /// Records written for this table
    pub rows: usize,
    /// Allow-listed columns found in the input
    pub kept_columns: Vec<String>,
    /// Input columns not carried into the output
    pub dropped_columns: Vec<String>,
    /// Allow-listed columns missing from the input
    pub missing_columns: Vec<String>,
}

impl TableStatistics {
    pub fn new(
        table: TableKind,
        rows: usize,
        allow_list: &[String],
        kept: &[String],
        dropped: &[String],
    ) -> Self {
        let missing_columns = allow_list
            .iter()
            .filter(|field| !kept.contains(*field))
            .cloned()
            .collect();

        Self {
            table,
            rows,
            kept_columns: kept.to_vec(),
            dropped_columns: dropped.to_vec(),
            missing_columns,
        }
    }
}

/// Statistics for one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStatistics {
    pub tables: Vec<TableStatistics>,
    /// Bytes written to communities.json
    pub communities_bytes: u64,
    /// Bytes written to graph.json
    pub graph_bytes: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ExportStatistics {
    fn default() -> Self {
        Self {
            tables: Vec::new(),
            communities_bytes: 0,
            graph_bytes: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ExportStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_table(&mut self, table: TableStatistics) {
        self.tables.push(table);
    }

    pub fn record_output(&mut self, communities_bytes: u64, graph_bytes: u64) {
        self.communities_bytes = communities_bytes;
        self.graph_bytes = graph_bytes;
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    pub fn table(&self, kind: TableKind) -> Option<&TableStatistics> {
        self.tables.iter().find(|t| t.table == kind)
    }

    pub fn rows(&self, kind: TableKind) -> usize {
        self.table(kind).map(|t| t.rows).unwrap_or(0)
    }

    pub fn total_records(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.communities_bytes + self.graph_bytes
    }

    /// Allow-listed columns that were absent from their input table
    pub fn has_missing_columns(&self) -> bool {
        self.tables.iter().any(|t| !t.missing_columns.is_empty())
    }
}
