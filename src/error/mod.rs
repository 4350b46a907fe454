//! Error types and handling infrastructure for table export

use anyhow::Error;
use polars::prelude::PolarsError;
use std::path::{Path, PathBuf};

use crate::parser::TableKind;

/// Core error types for the export process
#[derive(Debug, thiserror::Error)]
pub enum ExportErrorKind {
    #[error("{table} table not found: {}", .path.display())]
    InputMissing { table: TableKind, path: PathBuf },

    #[error("Cannot read {table} table {}: {message}", .path.display())]
    InputUnreadable {
        table: TableKind,
        path: PathBuf,
        message: String,
    },

    #[error("Cannot parse {table} table {}: {message}", .path.display())]
    InputMalformed {
        table: TableKind,
        path: PathBuf,
        message: String,
    },

    #[error("Cannot write {}: {message}", .path.display())]
    OutputWrite { path: PathBuf, message: String },

    #[error("Output directory is locked: {}", .path.display())]
    OutputLocked { path: PathBuf },

    #[error("Unsupported {dtype} value in {table}.{column} at row {row}")]
    UnsupportedValue {
        table: TableKind,
        column: String,
        row: usize,
        dtype: String,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ExportErrorKind {
    /// Classify an IO failure that happened while opening an input table
    pub fn input_io(table: TableKind, path: &Path, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::InputMissing {
                table,
                path: path.to_path_buf(),
            }
        } else {
            Self::InputUnreadable {
                table,
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }

    pub fn input_malformed(table: TableKind, path: &Path, message: String) -> Self {
        Self::InputMalformed {
            table,
            path: path.to_path_buf(),
            message,
        }
    }

    pub fn output_write(path: &Path, message: String) -> Self {
        Self::OutputWrite {
            path: path.to_path_buf(),
            message,
        }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Whether the failure happened before anything was written
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputMissing { .. } | Self::InputUnreadable { .. } | Self::InputMalformed { .. }
        )
    }
}

/// Main error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("{kind}")]
    Export { kind: ExportErrorKind },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Table error: {0}")]
    Table(#[from] PolarsError),

    #[error(transparent)]
    Other(#[from] Error),
}

impl From<ExportErrorKind> for ExportError {
    fn from(kind: ExportErrorKind) -> Self {
        Self::Export { kind }
    }
}

impl ExportError {
    pub fn export(kind: ExportErrorKind) -> Self {
        Self::Export { kind }
    }

    pub fn configuration(message: String) -> Self {
        Self::export(ExportErrorKind::configuration(message))
    }

    pub fn output_write(path: &Path, err: std::io::Error) -> Self {
        Self::export(ExportErrorKind::output_write(path, err.to_string()))
    }

    /// The export-specific kind, if this error carries one
    pub fn kind(&self) -> Option<&ExportErrorKind> {
        match self {
            Self::Export { kind } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Export { kind } => match kind {
                ExportErrorKind::InputMissing { table, path } => {
                    format!(
                        "Input table '{}' does not exist: {}",
                        table,
                        path.display()
                    )
                }
                ExportErrorKind::InputMalformed {
                    table,
                    path,
                    message,
                } => {
                    format!(
                        "Input table '{}' is not a valid Parquet file ({}): {}",
                        table,
                        path.display(),
                        message
                    )
                }
                ExportErrorKind::OutputLocked { path } => {
                    format!(
                        "Another export is writing to this directory (lock file: {})",
                        path.display()
                    )
                }
                ExportErrorKind::UnsupportedValue {
                    table,
                    column,
                    row,
                    dtype,
                } => {
                    format!(
                        "Column '{}' of the {} table holds a {} value at row {} that has no JSON form",
                        column, table, dtype, row
                    )
                }
                _ => self.to_string(),
            },
            Self::Json(err) => format!("Failed to serialize JSON output: {}", err),
            Self::Table(err) => format!("Failed to process table data: {}", err),
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
