//! Catalog data model and JSON writer.
//!
//! The output file wraps the record list in a single top-level object:
//!
//! ```json
//! {
//!     "extensions": [
//!         {
//!             "extension_name": "Deck Status",
//!             "details": {
//!                 "author": "Christina",
//!                 "description": "Shows deck status",
//!                 "latest_version": "2.0",
//!                 "download_link": ""
//!             }
//!         }
//!     ]
//! }
//! ```
//!
//! Record order follows the accumulator map's iteration order and is not
//! guaranteed stable across runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One distinct extension in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtensionRecord {
    /// Extension name, the deduplication key.
    pub extension_name: String,
    /// Nested detail block.
    pub details: ExtensionDetails,
}

/// Detail block of an [`ExtensionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtensionDetails {
    /// Operator-supplied author string, identical for every record.
    pub author: String,
    /// Extracted description, possibly empty.
    pub description: String,
    /// Highest version string seen for this name.
    pub latest_version: String,
    /// Always empty; filled in by a downstream publishing step.
    pub download_link: String,
}

impl ExtensionRecord {
    /// Create a record with an empty `download_link`.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            extension_name: name.into(),
            details: ExtensionDetails {
                author: author.into(),
                description: description.into(),
                latest_version: latest_version.into(),
                download_link: String::new(),
            },
        }
    }
}

/// The final deduplicated collection of extension records.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    /// At most one record per distinct extension name.
    pub extensions: Vec<ExtensionRecord>,
}

impl Catalog {
    /// Build a catalog from the name-keyed accumulator map.
    pub fn from_records(records: HashMap<String, ExtensionRecord>) -> Self {
        Self {
            extensions: records.into_values().collect(),
        }
    }

    /// Number of catalogued extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Look up a record by extension name.
    pub fn get(&self, name: &str) -> Option<&ExtensionRecord> {
        self.extensions.iter().find(|r| r.extension_name == name)
    }

    /// Serialize to pretty-printed JSON with 4-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8(buf).expect("serialized JSON is UTF-8"))
    }

    /// Write the catalog to `path`, overwriting any existing file.
    ///
    /// The write is deliberately plain (no temp-file rename, no locking):
    /// the tool is single-operator and the file is only written after the
    /// whole scan has succeeded.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), records = self.len(), "wrote catalog");
        Ok(())
    }
}
