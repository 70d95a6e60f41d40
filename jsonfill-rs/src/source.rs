//! Locating and loading the JSON data file for a project.

use crate::error::{FillError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory searched when the data file is not in the project root.
pub const FALLBACK_DIR: &str = "source";

/// Normalize a data file name (add .json extension if needed).
pub fn json_file_name(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    }
}

/// Find the data file for a project.
///
/// Looks for `<project>/<name>.json`, then `<project>/source/<name>.json`.
pub fn locate_json_source(project_dir: &Path, name: &str) -> Result<PathBuf> {
    let file_name = json_file_name(name);

    let primary = project_dir.join(&file_name);
    let found = primary.is_file();
    tracing::debug!(path = %primary.display(), found, "trying JSON path");
    if found {
        return Ok(primary);
    }

    let fallback = project_dir.join(FALLBACK_DIR).join(&file_name);
    let found = fallback.is_file();
    tracing::debug!(path = %fallback.display(), found, "fallback JSON path");
    if found {
        return Ok(fallback);
    }

    Err(FillError::SourceNotFound(primary))
}

/// Read and decode a JSON data file.
pub fn load_value_tree(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)?;
    let tree: Value = serde_json::from_str(&raw).map_err(|source| FillError::InvalidJsonFile {
        path: path.to_path_buf(),
        source,
    })?;

    if let Value::Object(map) = &tree {
        tracing::debug!(
            path = %path.display(),
            top_level_keys = ?map.keys().collect::<Vec<_>>(),
            "loaded JSON"
        );
    }
    Ok(tree)
}

/// Locate and load the data file for a project.
pub fn load_project_source(project_dir: &Path, name: &str) -> Result<(PathBuf, Value)> {
    let path = locate_json_source(project_dir, name)?;
    let tree = load_value_tree(&path)?;
    Ok((path, tree))
}
