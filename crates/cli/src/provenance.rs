use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Size of one triangulation run, recorded next to its outputs.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RunCounts {
    pub vertices: usize,
    pub diagonals: usize,
    pub pieces: usize,
    pub triangles: usize,
}

/// Metadata written into a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
    pub counts: Vec<RunCounts>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self {
            params,
            tag,
            counts: Vec::new(),
        }
    }

    pub fn with_counts(mut self, counts: Vec<RunCounts>) -> Self {
        self.counts = counts;
        self
    }
}

/// Write `<stem>.provenance.json` next to `artifact`: code revision, callsite,
/// tag, params, per-polygon counts and the artifact path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": monotri::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tag": payload.tag,
        "params": payload.params,
        "counts": payload.counts,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git rev-parse`.
pub fn current_git_rev() -> String {
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
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_results() {
        let derived = provenance_path(Path::new("/tmp/runs/square.tri"));
        assert_eq!(derived, Path::new("/tmp/runs/square.provenance.json"));
    }

    #[test]
    fn sidecar_records_counts_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("out").join("notch.tri");
        let counts = RunCounts {
            vertices: 5,
            diagonals: 1,
            pieces: 2,
            triangles: 3,
        };
        let payload = Payload::new(json!({"input": "notch.json"}), Some("smoke".into()))
            .with_counts(vec![counts]);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["tag"], "smoke");
        assert_eq!(parsed["counts"][0]["triangles"], 3);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
