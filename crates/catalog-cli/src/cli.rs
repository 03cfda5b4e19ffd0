//! CLI argument parsing using clap derive

use std::path::PathBuf;

use catalog_core::config::{DEFAULT_AUTHOR, DEFAULT_OUTPUT_FILE};
use clap::Parser;

/// Extension Catalog Generator - Scan a folder of SAMMI extensions and write
/// a JSON catalog
#[derive(Parser, Debug)]
#[command(name = "extcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing the extensions (each in its own subfolder)
    pub root: PathBuf,

    /// Author name recorded for every extension
    #[arg(short, long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Output JSON file (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Skip directories whose path contains this substring (repeatable);
    /// defaults to node_modules
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
