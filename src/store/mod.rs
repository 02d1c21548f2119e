//! Image Record Sources
//!
//! Raw image metadata as reported by `docker inspect`, and the sources that
//! produce it. A source is the only blocking collaborator of the forest: it is
//! called once per run and its records are handed to `Forest::build`.

pub mod docker;
pub mod snapshot;

pub use docker::DockerCli;
pub use snapshot::SnapshotSource;

use crate::error::SourceError;
use crate::types::ImageId;
use serde::{Deserialize, Serialize};

/// ImageRecord: the subset of `docker inspect` output the forest needs.
///
/// Unknown fields are ignored, so full inspect documents deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecord {
    /// Algorithm-prefixed digest, e.g. `sha256:…`
    pub id: String,
    /// Parent digest; docker reports an empty string for base layers
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub repo_tags: Option<Vec<String>>,
    pub size: u64,
    pub created: String,
}

impl ImageRecord {
    /// Parent digest, treating an empty string as absent.
    pub fn parent_digest(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }

    /// Tags as reported, treating null as empty.
    pub fn tags(&self) -> &[String] {
        self.repo_tags.as_deref().unwrap_or(&[])
    }
}

/// Source of raw image records.
pub trait RecordSource {
    /// All local images.
    fn fetch_records(&self) -> Result<Vec<ImageRecord>, SourceError>;

    /// Map ids, id prefixes or tags to normalized image ids, preserving order.
    fn resolve_ids(&self, targets: &[String]) -> Result<Vec<ImageId>, SourceError>;
}
