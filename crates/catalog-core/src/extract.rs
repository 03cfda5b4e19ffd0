//! Extracting extension metadata from definition files.
//!
//! Definition files use a line-oriented micro-format: a bracketed marker on
//! one line, the field value on the line after it.
//!
//! ```text
//! [extension_name]
//! Deck Status
//!
//! [extension_info]
//! Shows the current deck status
//!
//! [extension_version]
//! 2.0
//! ```
//!
//! Marker order and presence are not required; missing markers leave the
//! field defaults in place. A marker on the final line of a file has no
//! value line and fails the whole run with [`Error::TrailingMarker`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, ExtensionRecord};
use crate::error::{Error, Result};

/// Marker line announcing the extension name on the following line.
pub const NAME_MARKER: &str = "[extension_name]";
/// Marker line announcing the description on the following line.
pub const INFO_MARKER: &str = "[extension_info]";
/// Marker line announcing the version on the following line.
pub const VERSION_MARKER: &str = "[extension_version]";

/// Version assumed when a file declares none.
pub const DEFAULT_VERSION: &str = "1.0";

/// Which field a marker line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Name,
    Info,
    Version,
}

impl Marker {
    /// First marker contained in `line`, checked in declaration order.
    fn in_line(line: &str) -> Option<Marker> {
        if line.contains(NAME_MARKER) {
            Some(Marker::Name)
        } else if line.contains(INFO_MARKER) {
            Some(Marker::Info)
        } else if line.contains(VERSION_MARKER) {
            Some(Marker::Version)
        } else {
            None
        }
    }

    fn text(self) -> &'static str {
        match self {
            Marker::Name => NAME_MARKER,
            Marker::Info => INFO_MARKER,
            Marker::Version => VERSION_MARKER,
        }
    }
}

/// Raw fields extracted from a single definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFields {
    /// Extension name; empty when the file declares none.
    pub name: String,
    /// Description; empty when the file declares none.
    pub description: String,
    /// Version string, `"1.0"` unless the file declares a non-empty one.
    pub version: String,
}

/// Parse the marker micro-format out of one definition file's text.
///
/// Later occurrences of a marker overwrite earlier ones, except that an
/// empty version value leaves the previous (or default) version in place.
/// The scan does not skip value lines, so a value line that itself contains
/// a marker is also treated as a marker line.
pub fn parse_definition(text: &str, path: &Path) -> Result<DefinitionFields> {
    let lines: Vec<&str> = text.lines().collect();
    let mut fields = DefinitionFields {
        name: String::new(),
        description: String::new(),
        version: DEFAULT_VERSION.to_string(),
    };

    for (i, line) in lines.iter().enumerate() {
        let Some(marker) = Marker::in_line(line) else {
            continue;
        };
        let value = lines
            .get(i + 1)
            .ok_or_else(|| Error::TrailingMarker {
                path: path.to_path_buf(),
                marker: marker.text(),
                line: i + 1,
            })?
            .trim();
        match marker {
            Marker::Name => fields.name = value.to_string(),
            Marker::Info => fields.description = value.to_string(),
            Marker::Version => {
                if !value.is_empty() {
                    fields.version = value.to_string();
                }
            }
        }
    }

    Ok(fields)
}

/// Read every representative file and merge the results into a deduplicated
/// catalog: one record per extension name, keeping the highest numeric
/// version.
///
/// Files whose extracted name is empty contribute nothing. Version
/// comparison is numeric (`f64`), not lexicographic, so `"10.0"` beats
/// `"9.0"`; multi-component versions like `"1.2.3"` are rejected with
/// [`Error::InvalidVersion`].
pub fn build_catalog(files: &HashMap<PathBuf, PathBuf>, author: &str) -> Result<Catalog> {
    let mut records: HashMap<String, ExtensionRecord> = HashMap::new();

    for file in files.values() {
        let text = fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
        let fields = parse_definition(&text, file)?;
        if fields.name.is_empty() {
            tracing::warn!(path = %file.display(), "no extension name, skipping file");
            continue;
        }
        tracing::debug!(
            path = %file.display(),
            name = %fields.name,
            version = %fields.version,
            "parsed definition file"
        );

        let version = parse_version(file, &fields.version)?;
        let record = ExtensionRecord::new(
            fields.name.clone(),
            author,
            fields.description,
            fields.version,
        );
        match records.entry(fields.name) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let existing = parse_version(file, &slot.get().details.latest_version)?;
                if version > existing {
                    slot.insert(record);
                }
            }
        }
    }

    Ok(Catalog::from_records(records))
}

fn parse_version(path: &Path, version: &str) -> Result<f64> {
    version.parse::<f64>().map_err(|source| Error::InvalidVersion {
        path: path.to_path_buf(),
        version: version.to_string(),
        source,
    })
}
