//! Configuration options for table export

use crate::parser::{TableKind, TableSource};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directory the indexing pipeline writes its tables to
pub const DEFAULT_INPUT_DIR: &str = "output";

/// Directory the web backend serves exported documents from
pub const DEFAULT_OUTPUT_DIR: &str = "../../memeED-backend/graphrag_export";

pub const COMMUNITIES_FILE_NAME: &str = "communities.json";
pub const GRAPH_FILE_NAME: &str = "graph.json";

pub const DEFAULT_COMMUNITY_FIELDS: &[&str] = &["id", "title", "summary", "keywords", "size"];
pub const DEFAULT_ENTITY_FIELDS: &[&str] = &["id", "title", "type", "description", "community"];
pub const DEFAULT_RELATIONSHIP_FIELDS: &[&str] = &["source", "target", "type", "weight"];

/// What to do with a cell whose value has no JSON form (struct, date, binary, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePolicy {
    /// Fail the export
    #[default]
    Reject,
    /// Emit the value's display string
    Stringify,
    /// Emit null
    Null,
}

/// Locations of the three input tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPaths {
    pub communities: PathBuf,
    pub entities: PathBuf,
    pub relationships: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self::from_dir(DEFAULT_INPUT_DIR)
    }
}

impl InputPaths {
    /// Resolve `<dir>/{communities,entities,relationships}.parquet`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            communities: dir.join(TableKind::Communities.file_name()),
            entities: dir.join(TableKind::Entities.file_name()),
            relationships: dir.join(TableKind::Relationships.file_name()),
        }
    }

    pub fn path(&self, table: TableKind) -> &Path {
        match table {
            TableKind::Communities => &self.communities,
            TableKind::Entities => &self.entities,
            TableKind::Relationships => &self.relationships,
        }
    }

    pub fn source(&self, table: TableKind) -> TableSource {
        TableSource::new(table, self.path(table))
    }
}

/// Export configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Input Parquet tables
    pub input_paths: InputPaths,
    /// Directory receiving communities.json and graph.json
    pub output_dir: PathBuf,
    /// Allow-list for the communities table, in output key order
    pub community_fields: Vec<String>,
    /// Allow-list for the entities table
    pub entity_fields: Vec<String>,
    /// Allow-list for the relationships table
    pub relationship_fields: Vec<String>,
    /// Handling of values with no JSON form
    pub value_policy: ValuePolicy,
    /// Hold an exclusive lock on the output directory while writing
    pub lock_output: bool,
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_paths: InputPaths::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            community_fields: owned(DEFAULT_COMMUNITY_FIELDS),
            entity_fields: owned(DEFAULT_ENTITY_FIELDS),
            relationship_fields: owned(DEFAULT_RELATIONSHIP_FIELDS),
            value_policy: ValuePolicy::Reject,
            lock_output: true,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read tables from `<dir>/*.parquet` and write documents to `output_dir`
    pub fn for_dirs(input_dir: impl AsRef<Path>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_paths: InputPaths::from_dir(input_dir),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_input_paths(mut self, input_paths: InputPaths) -> Self {
        self.input_paths = input_paths;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Replace the allow-list of one table
    pub fn with_fields<S: AsRef<str>>(mut self, table: TableKind, fields: &[S]) -> Self {
        let fields = fields.iter().map(|f| f.as_ref().to_string()).collect();
        match table {
            TableKind::Communities => self.community_fields = fields,
            TableKind::Entities => self.entity_fields = fields,
            TableKind::Relationships => self.relationship_fields = fields,
        }
        self
    }

    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    pub fn with_output_lock(mut self, enabled: bool) -> Self {
        self.lock_output = enabled;
        self
    }

    pub fn fields(&self, table: TableKind) -> &[String] {
        match table {
            TableKind::Communities => &self.community_fields,
            TableKind::Entities => &self.entity_fields,
            TableKind::Relationships => &self.relationship_fields,
        }
    }

    pub fn communities_output(&self) -> PathBuf {
        self.output_dir.join(COMMUNITIES_FILE_NAME)
    }

    pub fn graph_output(&self) -> PathBuf {
        self.output_dir.join(GRAPH_FILE_NAME)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        for table in TableKind::ALL {
            let fields = self.fields(table);
            if fields.is_empty() {
                return Err(format!("Field list for the {} table is empty", table));
            }

            let mut seen = HashSet::new();
            for field in fields {
                if field.trim().is_empty() {
                    return Err(format!(
                        "Field list for the {} table contains an empty name",
                        table
                    ));
                }
                if !seen.insert(field.as_str()) {
                    return Err(format!(
                        "Field '{}' is listed twice for the {} table",
                        field, table
                    ));
                }
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory must not be empty".to_string());
        }

        Ok(())
    }
}
