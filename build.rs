//! Bakes the crate directory into the binaries as `CHALET_ROOT_HINT` so the
//! helpers can find `data/` and `schema/` when run from outside the repo.

use std::env;
use std::path::{Path, PathBuf};

const MARKERS: [&str; 2] = ["data/property.json", "schema/property.schema.json"];

fn holds_property_data(dir: &Path) -> bool {
    MARKERS.iter().all(|marker| dir.join(marker).is_file())
}

fn main() {
    println!("cargo:rerun-if-env-changed=CHALET_ROOT_HINT");
    for marker in MARKERS {
        println!("cargo:rerun-if-changed={marker}");
    }

    let root = match env::var_os("CHALET_ROOT_HINT") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => match env::var_os("CARGO_MANIFEST_DIR") {
            Some(manifest_dir) => PathBuf::from(manifest_dir),
            None => return,
        },
    };

    if !holds_property_data(&root) {
        println!(
            "cargo:warning=CHALET_ROOT_HINT not set: {} has no property data",
            root.display()
        );
        return;
    }

    let root = root.canonicalize().unwrap_or(root);
    println!("cargo:rustc-env=CHALET_ROOT_HINT={}", root.display());
}
