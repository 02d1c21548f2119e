//! Snapshot record source: a saved `docker inspect` JSON array.

use super::{ImageRecord, RecordSource};
use crate::error::SourceError;
use crate::types::{normalize_digest, ImageId};
use std::path::Path;
use tracing::debug;

const LATEST_TAG: &str = ":latest";
const DIGEST_PREFIX: &str = "sha256:";

/// Records held in memory, loaded from a file or supplied directly.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    records: Vec<ImageRecord>,
}

impl SnapshotSource {
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    /// Load `docker inspect` output saved to `path`.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<ImageRecord> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), count = records.len(), "Loaded image snapshot");
        Ok(Self { records })
    }

    /// Resolve one target the way `docker inspect` would for local images:
    /// full id, tag, implicit `:latest` tag, then unique id prefix.
    fn resolve_one(&self, target: &str) -> Result<ImageId, SourceError> {
        let wanted = target.strip_prefix(DIGEST_PREFIX).unwrap_or(target);
        if let Some(record) = self
            .records
            .iter()
            .find(|r| normalize_digest(&r.id) == wanted)
        {
            return Ok(normalize_digest(&record.id));
        }

        let implicit_latest = format!("{}{}", target, LATEST_TAG);
        let by_tag = |tag: &str| {
            self.records
                .iter()
                .find(|r| r.tags().iter().any(|t| t == tag))
        };
        let name = target.rsplit_once('/').map_or(target, |(_, last)| last);
        if let Some(record) = by_tag(target).or_else(|| {
            if name.contains(':') {
                None
            } else {
                by_tag(&implicit_latest)
            }
        }) {
            return Ok(normalize_digest(&record.id));
        }

        let mut prefixed = self
            .records
            .iter()
            .map(|r| normalize_digest(&r.id))
            .filter(|id| !wanted.is_empty() && id.starts_with(wanted));
        match (prefixed.next(), prefixed.next()) {
            (Some(id), None) => Ok(id),
            _ => Err(SourceError::UnknownImage(target.to_string())),
        }
    }
}

impl RecordSource for SnapshotSource {
    fn fetch_records(&self) -> Result<Vec<ImageRecord>, SourceError> {
        Ok(self.records.clone())
    }

    fn resolve_ids(&self, targets: &[String]) -> Result<Vec<ImageId>, SourceError> {
        targets.iter().map(|t| self.resolve_one(t)).collect()
    }
}
