//! Catalog generation configuration.
//!
//! The original tool this replaces kept its settings in module-level
//! constants edited by the operator. Here they live in an explicit
//! [`CatalogConfig`] passed into the entry point; the defaults match the
//! historical constants.

use std::path::PathBuf;

/// Default author recorded for every catalogued extension.
pub const DEFAULT_AUTHOR: &str = "YOUR NAME";

/// Default output filename, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "extensions.json";

/// Directory-name substrings excluded from the scan by default.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Settings for one catalog generation run.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Root directory to scan. Extensions are expected one or more levels
    /// below it, never directly in the root.
    pub root: PathBuf,
    /// Substrings that exclude a directory when they appear anywhere in its
    /// full path. This is a plain substring match, not a path-segment match,
    /// so `node_modules` also excludes a `my_node_modules_project` directory.
    pub excluded_dirs: Vec<String>,
    /// Author string stamped into every record.
    pub author: String,
    /// Path of the JSON file to write. Overwritten if it exists.
    pub output_file: PathBuf,
}

impl CatalogConfig {
    /// Create a config for `root` with the default exclusions, author, and
    /// output filename.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            author: DEFAULT_AUTHOR.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
