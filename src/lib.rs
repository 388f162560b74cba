//! Shared library for the Alpine Court Chalet content model.
//!
//! The crate exposes the property record (`Property`), a validated read-only
//! view over it (`PropertyCatalog`), and the derivations page templates rely
//! on: flattened amenities, schema.org amenity features, the formatted
//! address, and contact selection. The helper binaries resolve the canonical
//! record under `data/` through the discovery functions defined here.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod error;
pub mod logging;
mod schema_loader;
pub mod structured_data;
pub mod validation;

pub use catalog::{
    Address, Amenity, AmenityCategory, BedConfiguration, BookingPeriod, BookingTerms,
    CancellationPolicy, CancellationTier, CatalogRepository, Company, Contact, ContactRole,
    GalleryImage, HouseRules, Property, PropertyCatalog, PropertyId, PropertyImages,
    PropertyLocation, PropertySpecs, SchemaAmenity, load_property_from_path,
};
pub use error::{CatalogError, ErrorKind};
pub use structured_data::vacation_rental;
pub use validation::validate_property;

pub const PROPERTY_DATA_PATH: &str = "data/property.json";
pub const PROPERTY_SCHEMA_PATH: &str = "schema/property.schema.json";

/// Returns true when `candidate` holds both the canonical record and its schema.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(PROPERTY_DATA_PATH).is_file() && candidate.join(PROPERTY_SCHEMA_PATH).is_file()
}

/// Verifies that an explicit `CHALET_ROOT` hint points at a valid repo.
fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root holding `data/` and `schema/`.
///
/// Search order: `CHALET_ROOT` if it points at a real repo, then the
/// directories above the current executable, then the build-time hint.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("CHALET_ROOT") {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("CHALET_ROOT_HINT") {
        if let Some(root) = repo_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate the property data repository. Set CHALET_ROOT to a directory containing {PROPERTY_DATA_PATH}."
    );
}

/// Canonical record path under a repository root.
pub fn default_property_path(repo_root: &Path) -> PathBuf {
    repo_root.join(PROPERTY_DATA_PATH)
}

/// Pick the property file a helper should read.
///
/// An explicit path wins, then `CHALET_PROPERTY_FILE`, then the canonical
/// record under the discovered repository root.
pub fn resolve_property_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("property file not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    if let Some(from_env) = env::var_os("CHALET_PROPERTY_FILE") {
        if !from_env.is_empty() {
            let path = PathBuf::from(from_env);
            if !path.is_file() {
                bail!(
                    "CHALET_PROPERTY_FILE points at a missing file: {}",
                    path.display()
                );
            }
            return Ok(path);
        }
    }

    Ok(default_property_path(&find_repo_root()?))
}
