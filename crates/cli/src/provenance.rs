//! Provenance sidecars for CLI artifacts.
//!
//! Every JSON artifact `out/front.json` gets `out/front.provenance.json`
//! recording the code revision, library version, the CLI call site, pipeline
//! parameters and source logs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

/// On-disk sidecar document.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Sidecar {
    pub code_rev: String,
    pub frontier_version: String,
    pub callsite: Callsite,
    pub params: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

/// Parameters and inputs that produced an artifact.
pub struct Provenance {
    params: Value,
    inputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_string_lossy().into_owned());
        self
    }

    /// Write the sidecar for `artifact` and return its path.
    #[track_caller]
    pub fn write_next_to(self, artifact: &Path) -> Result<PathBuf> {
        let caller = Location::caller();
        let doc = Sidecar {
            code_rev: code_rev(),
            frontier_version: frontier::VERSION.to_string(),
            callsite: Callsite {
                file: caller.file().to_string(),
                line: caller.line(),
            },
            params: self.params,
            inputs: self.inputs,
            outputs: vec![artifact.to_string_lossy().into_owned()],
        };
        let path = sidecar_path(artifact);
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "sidecar written");
        Ok(path)
    }
}

/// `dir/name.ext` becomes `dir/name.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git rev-parse`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
