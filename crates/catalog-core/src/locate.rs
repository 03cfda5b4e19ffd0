//! Locating representative definition files.
//!
//! Walks the directory tree below the configured root and, for every
//! directory that holds at least one `.sef` file, selects the single
//! most-recently-modified one as that directory's representative. The root
//! directory itself never yields an entry: each extension is assumed to live
//! in its own folder below the root.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::DEFINITION_FILE_SUFFIX;

/// Find the representative definition file for every qualifying directory
/// under `root`.
///
/// Returns a map from directory path to the path of its newest `.sef` file.
/// Directories whose full path contains any of `excluded_dirs` as a
/// substring are skipped entirely, subtrees included.
///
/// Any filesystem error (unreadable directory, vanished file) aborts the
/// scan; there is no partial-result recovery.
pub fn locate_definition_files(
    root: &Path,
    excluded_dirs: &[String],
) -> Result<HashMap<PathBuf, PathBuf>> {
    let mut selected = HashMap::new();
    walk(root, root, excluded_dirs, &mut selected)?;
    tracing::debug!(
        directories = selected.len(),
        "located representative definition files"
    );
    Ok(selected)
}

fn walk(
    root: &Path,
    dir: &Path,
    excluded_dirs: &[String],
    selected: &mut HashMap<PathBuf, PathBuf>,
) -> Result<()> {
    if is_excluded(dir, excluded_dirs) {
        tracing::debug!(path = %dir.display(), "skipping excluded directory");
        return Ok(());
    }

    // Newest .sef file seen directly in this directory so far. Ties keep the
    // first file the read_dir order yields.
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

        if file_type.is_dir() {
            walk(root, &path, excluded_dirs, selected)?;
        } else if dir != root && is_definition_file(&entry.file_name().to_string_lossy()) {
            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .map_err(|e| Error::io(&path, e))?;
            match &newest {
                Some((best, _)) if *best >= modified => {}
                _ => newest = Some((modified, path)),
            }
        }
    }

    if let Some((_, file)) = newest {
        selected.insert(dir.to_path_buf(), file);
    }
    Ok(())
}

/// Case-sensitive suffix match on the filename.
fn is_definition_file(name: &str) -> bool {
    name.ends_with(DEFINITION_FILE_SUFFIX)
}

/// Substring match against the full directory path, not a path-segment
/// match: `node_modules` also excludes a `my_node_modules_project` directory.
fn is_excluded(dir: &Path, excluded_dirs: &[String]) -> bool {
    let path_str = dir.to_string_lossy();
    excluded_dirs.iter().any(|sub| path_str.contains(sub.as_str()))
}
