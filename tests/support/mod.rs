#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use chalet_catalog::find_repo_root;
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn repo_root() -> PathBuf {
    find_repo_root().expect("tests require repository root")
}

pub fn canonical_property_json() -> Value {
    let path = chalet_catalog::default_property_path(&repo_root());
    let data = std::fs::read_to_string(&path).expect("read canonical property");
    serde_json::from_str(&data).expect("canonical property is JSON")
}

/// Write `value` to a temp file; keep the handle alive while the path is used.
pub fn write_json(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate temp file")?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

pub fn property_query() -> Command {
    Command::new(env!("CARGO_BIN_EXE_property-query"))
}

pub fn property_check() -> Command {
    Command::new(env!("CARGO_BIN_EXE_property-check"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout is not JSON")
}
