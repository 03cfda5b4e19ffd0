//! Extension Catalog Generator CLI
//!
//! One-shot batch tool: scan a folder of SAMMI extensions for `.sef`
//! definition files and write a deduplicated JSON catalog.

mod cli;
mod error;

use catalog_core::{generate_catalog, CatalogConfig};
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if !cli.root.is_dir() {
        return Err(CliError::user(format!(
            "'{}' is not a directory",
            cli.root.display()
        )));
    }

    let mut config = CatalogConfig::new(&cli.root);
    config.author = cli.author;
    config.output_file = cli.output;
    if !cli.exclude.is_empty() {
        config.excluded_dirs = cli.exclude;
    }

    let catalog = generate_catalog(&config)?;
    catalog.write_to(&config.output_file)?;

    println!(
        "{} Wrote {} extension(s) to {}",
        "=>".blue().bold(),
        catalog.len().to_string().cyan(),
        config.output_file.display().to_string().bold()
    );
    Ok(())
}
