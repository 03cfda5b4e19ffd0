//! SEF extension catalog generation.
//!
//! This crate scans a directory tree for `.sef` extension-definition files,
//! extracts each extension's metadata from a line-marker micro-format,
//! deduplicates by name keeping the highest numeric version, and serializes
//! the result as a JSON catalog.
//!
//! The pipeline is three steps, composed by [`generate_catalog`]:
//!
//! 1. [`locate`] — pick each directory's newest `.sef` file
//! 2. [`extract`] — parse the files and merge them into a [`Catalog`]
//! 3. [`Catalog::write_to`] — write the pretty-printed JSON output
//!
//! The run is single-threaded and fail-fast: the first filesystem or format
//! error aborts everything and no output file is written.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod locate;

/// Filename suffix identifying extension definition files.
///
/// Matched case-sensitively against the whole filename, so `FOO.SEF` is not
/// a definition file.
pub const DEFINITION_FILE_SUFFIX: &str = ".sef";

pub use catalog::{Catalog, ExtensionDetails, ExtensionRecord};
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use extract::{build_catalog, parse_definition, DefinitionFields, DEFAULT_VERSION};
pub use locate::locate_definition_files;

/// Run the locate and extract steps for `config`, returning the deduplicated
/// catalog. Writing the output file is left to the caller (see
/// [`Catalog::write_to`]).
pub fn generate_catalog(config: &CatalogConfig) -> Result<Catalog> {
    let files = locate_definition_files(&config.root, &config.excluded_dirs)?;
    build_catalog(&files, &config.author)
}
