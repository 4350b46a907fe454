//! Parquet table loading module

pub mod projection;

use crate::error::{ExportErrorKind, ExportResult};
use polars::io::SerReader;
use polars::prelude::{DataFrame, ParquetReader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The three tables produced by the graph indexing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Communities,
    Entities,
    Relationships,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [
        TableKind::Communities,
        TableKind::Entities,
        TableKind::Relationships,
    ];

    /// File stem used by the pipeline's output directory
    pub fn file_stem(&self) -> &'static str {
        match self {
            TableKind::Communities => "communities",
            TableKind::Entities => "entities",
            TableKind::Relationships => "relationships",
        }
    }

    /// File name of the table inside the pipeline's output directory
    pub fn file_name(&self) -> String {
        format!("{}.parquet", self.file_stem())
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// A Parquet table on disk
#[derive(Debug, Clone, PartialEq)]
pub struct TableSource {
    pub kind: TableKind,
    pub path: PathBuf,
}

impl TableSource {
    pub fn new(kind: TableKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        format!("{} table: {}", self.kind, self.path.display())
    }

    /// Check if the source exists and is a regular file
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole table into memory
    pub fn read(&self) -> ExportResult<DataFrame> {
        let file = File::open(&self.path)
            .map_err(|e| ExportErrorKind::input_io(self.kind, &self.path, &e))?;

        let frame = ParquetReader::new(file).finish().map_err(|e| {
            ExportErrorKind::input_malformed(self.kind, &self.path, e.to_string())
        })?;

        tracing::debug!(
            table = %self.kind,
            path = %self.path.display(),
            rows = frame.height(),
            columns = frame.width(),
            "read table"
        );

        Ok(frame)
    }
}
