//! Core export engine: Parquet tables in, JSON documents out

use crate::conversion::config::ExportConfig;
use crate::conversion::lock::OutputLock;
use crate::conversion::stats::{ExportStatistics, TableStatistics};
use crate::error::{ExportError, ExportResult};
use crate::formatter::{render_pretty, to_records, CommunitiesDocument, GraphDocument, Record};
use crate::parser::projection::project;
use crate::parser::TableKind;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One table after projection and normalization
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub kind: TableKind,
    pub records: Vec<Record>,
    pub statistics: TableStatistics,
}

/// All three tables, ready to be written
#[derive(Debug, Clone)]
pub struct LoadedTables {
    pub communities: LoadedTable,
    pub entities: LoadedTable,
    pub relationships: LoadedTable,
    started: Instant,
}

/// Outcome of a successful export
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    pub communities_path: PathBuf,
    pub graph_path: PathBuf,
    pub statistics: ExportStatistics,
}

/// Main export engine
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Read the three tables and write both documents.
    ///
    /// Inputs are fully read before the output directory is touched, so a
    /// missing or malformed table leaves existing output untouched.
    pub fn export(&self) -> ExportResult<ExportReport> {
        let tables = self.load_tables()?;
        self.write(tables)
    }

    /// Read, project and normalize every input table
    pub fn load_tables(&self) -> ExportResult<LoadedTables> {
        let started = Instant::now();
        self.config.validate().map_err(ExportError::configuration)?;

        Ok(LoadedTables {
            communities: self.load_table(TableKind::Communities)?,
            entities: self.load_table(TableKind::Entities)?,
            relationships: self.load_table(TableKind::Relationships)?,
            started,
        })
    }

    /// Read one table and turn it into records
    pub fn load_table(&self, kind: TableKind) -> ExportResult<LoadedTable> {
        let source = self.config.input_paths.source(kind);
        tracing::debug!("loading {}", source.description());
        let frame = source.read()?;

        let fields = self.config.fields(kind);
        let projection = project(&frame, fields)?;
        if !projection.dropped.is_empty() {
            tracing::debug!(table = %kind, dropped = ?projection.dropped, "dropping columns");
        }

        let records = to_records(&projection, kind, self.config.value_policy)?;
        let statistics = TableStatistics::new(
            kind,
            records.len(),
            fields,
            &projection.kept,
            &projection.dropped,
        );
        if !statistics.missing_columns.is_empty() {
            tracing::info!(
                table = %kind,
                missing = ?statistics.missing_columns,
                "allow-listed columns not present in input"
            );
        }

        Ok(LoadedTable {
            kind,
            records,
            statistics,
        })
    }

    /// Serialize and write both documents into the output directory
    pub fn write(&self, tables: LoadedTables) -> ExportResult<ExportReport> {
        let LoadedTables {
            communities,
            entities,
            relationships,
            started,
        } = tables;

        let mut statistics = ExportStatistics::new();
        statistics.record_table(communities.statistics);
        statistics.record_table(entities.statistics);
        statistics.record_table(relationships.statistics);

        let communities_json = render_pretty(&CommunitiesDocument {
            communities: communities.records,
        })?;
        let graph_json = render_pretty(&GraphDocument {
            nodes: entities.records,
            edges: relationships.records,
        })?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| ExportError::output_write(output_dir, e))?;

        let _lock = if self.config.lock_output {
            Some(OutputLock::acquire(output_dir)?)
        } else {
            None
        };

        let communities_path = self.config.communities_output();
        let graph_path = self.config.graph_output();
        write_document(&communities_path, &communities_json)?;
        write_document(&graph_path, &graph_json)?;

        statistics.record_output(communities_json.len() as u64, graph_json.len() as u64);
        statistics.finish(started.elapsed());

        tracing::info!(
            output_dir = %output_dir.display(),
            records = statistics.total_records(),
            bytes = statistics.total_bytes(),
            "export complete"
        );

        Ok(ExportReport {
            output_dir: output_dir.clone(),
            communities_path,
            graph_path,
            statistics,
        })
    }
}

fn write_document(path: &Path, content: &str) -> ExportResult<()> {
    fs::write(path, content).map_err(|e| ExportError::output_write(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
