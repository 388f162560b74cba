//! Validate property records and report every problem found.
//!
//! With no arguments the canonical record is checked. Each file is loaded
//! through the same schema and record checks as `PropertyCatalog::load`, and
//! the files that pass are registered together so a second record with an
//! already-seen identifier is reported as a conflict.

use anyhow::Result;
use chalet_catalog::{CatalogRepository, PropertyCatalog, logging, resolve_property_path};
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    logging::init();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(2);
        }
    }
}

fn run() -> Result<bool> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in env::args_os().skip(1) {
        if arg == "--help" || arg == "-h" {
            println!("Usage: property-check [PATH...]");
            return Ok(true);
        }
        paths.push(PathBuf::from(arg));
    }
    if paths.is_empty() {
        paths.push(resolve_property_path(None)?);
    }

    let mut repository = CatalogRepository::default();
    let mut all_ok = true;
    for path in &paths {
        let outcome = PropertyCatalog::load(path)
            .and_then(|catalog| repository.register(catalog).map_err(anyhow::Error::from));
        match outcome {
            Ok(()) => println!("ok {}", path.display()),
            Err(err) => {
                all_ok = false;
                println!("FAIL {}", path.display());
                for line in format!("{err:#}").lines() {
                    println!("  {line}");
                }
            }
        }
    }

    info!(
        checked = paths.len(),
        registered = repository.len(),
        "property check finished"
    );
    Ok(all_ok)
}
