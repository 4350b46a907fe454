use std::path::{Path, PathBuf};

use crate::conversion::config::{InputPaths, DEFAULT_INPUT_DIR};

/// Resolve the three input tables from an optional input directory plus
/// per-table overrides. An override wins over the directory.
pub fn resolve_input_paths(
    input_dir: Option<&Path>,
    communities: Option<&PathBuf>,
    entities: Option<&PathBuf>,
    relationships: Option<&PathBuf>,
) -> InputPaths {
    let mut paths = InputPaths::from_dir(input_dir.unwrap_or(Path::new(DEFAULT_INPUT_DIR)));
    if let Some(path) = communities {
        paths.communities = path.clone();
    }
    if let Some(path) = entities {
        paths.entities = path.clone();
    }
    if let Some(path) = relationships {
        paths.relationships = path.clone();
    }
    paths
}
