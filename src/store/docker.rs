//! Docker CLI record source.

use super::{ImageRecord, RecordSource};
use crate::error::SourceError;
use crate::types::{normalize_digest, ImageId};
use std::collections::HashSet;
use std::process::Command;
use tracing::debug;

const LIST_IDS: &[&str] = &["image", "ls", "-a", "--no-trunc", "--format", "{{.ID}}"];
const INSPECT: &[&str] = &["inspect"];
const GET_IDS: &[&str] = &["inspect", "-f", "{{.Id}}"];

/// Reads image metadata by shelling out to the `docker` binary.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run docker with `base` followed by `extra`, returning stdout.
    ///
    /// A non-zero exit becomes `CommandFailed` with stderr indented under `context`.
    fn run(&self, base: &[&str], extra: &[String], context: &str) -> Result<String, SourceError> {
        debug!(binary = %self.binary, args = ?base, extra = extra.len(), "Running docker");
        let output = Command::new(&self.binary)
            .args(base)
            .args(extra)
            .output()
            .map_err(|source| SourceError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::CommandFailed {
                context: context.to_string(),
                stderr: stderr.trim_end().lines().collect::<Vec<_>>().join("\n  "),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Ids of all local images, including intermediate ones.
    pub fn list_ids(&self) -> Result<Vec<ImageId>, SourceError> {
        let stdout = self.run(LIST_IDS, &[], "Problem getting the list of images")?;
        Ok(dedup_ids(stdout.lines()))
    }

    /// Inspect the given ids or tags.
    pub fn inspect(&self, targets: &[String]) -> Result<Vec<ImageRecord>, SourceError> {
        if targets.is_empty() {
            return Ok(Vec::new());
        }
        let stdout = self.run(INSPECT, targets, "Problem inspecting id(s) / tag(s)")?;
        Ok(serde_json::from_str(&stdout)?)
    }
}

impl RecordSource for DockerCli {
    fn fetch_records(&self) -> Result<Vec<ImageRecord>, SourceError> {
        let ids = self.list_ids()?;
        let records = self.inspect(&ids)?;
        debug!(count = records.len(), "Fetched image records from docker");
        Ok(records)
    }

    fn resolve_ids(&self, targets: &[String]) -> Result<Vec<ImageId>, SourceError> {
        if targets.is_empty() {
            return Ok(Vec::new());
        }
        let stdout = self.run(GET_IDS, targets, "Problem getting id(s) / tag(s)")?;
        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(normalize_digest)
            .collect())
    }
}

/// Normalize and deduplicate ids, keeping first-seen order.
fn dedup_ids<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<ImageId> {
    let mut seen = HashSet::new();
    lines
        .filter(|line| !line.trim().is_empty())
        .map(normalize_digest)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
