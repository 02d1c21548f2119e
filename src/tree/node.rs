//! Image node: one record plus the links computed when its forest is built.

use super::ordering;
use super::timestamp::parse_created;
use crate::error::ForestError;
use crate::store::ImageRecord;
use crate::types::{normalize_digest, ImageId};
use chrono::{DateTime, Duration, FixedOffset};
use std::hash::{Hash, Hasher};

/// A node in an image forest.
///
/// Identity is the id alone; relationship fields are indices into the owning
/// forest and are filled in by `Forest::build`.
#[derive(Debug, Clone)]
pub struct Node {
    record: ImageRecord,
    id: ImageId,
    parent_id: Option<ImageId>,
    tags: Vec<String>,
    size: u64,
    created: DateTime<FixedOffset>,
    sort_key: String,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) size_delta: Option<i64>,
    pub(crate) time_delta: Option<Duration>,
}

impl Node {
    /// Create an unlinked node from a raw record.
    pub fn from_record(record: ImageRecord) -> Result<Self, ForestError> {
        let created = parse_created(&record.created)?;
        let tags = record.tags().to_vec();
        let sort_key = ordering::sort_key(&tags, &created);
        Ok(Node {
            id: normalize_digest(&record.id),
            parent_id: record.parent_digest().map(normalize_digest),
            size: record.size,
            tags,
            created,
            sort_key,
            record,
            parent: None,
            children: Vec::new(),
            size_delta: None,
            time_delta: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Tags as reported by the source.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags in display order (`:latest` first).
    pub fn sorted_tags(&self) -> Vec<String> {
        ordering::sort_tags(&self.tags)
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn created(&self) -> &DateTime<FixedOffset> {
        &self.created
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    /// The record this node was built from.
    pub fn record(&self) -> &ImageRecord {
        &self.record
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// `size - parent.size`; `None` for roots.
    pub fn size_delta(&self) -> Option<i64> {
        self.size_delta
    }

    /// `created - parent.created`; `None` for roots.
    pub fn time_delta(&self) -> Option<Duration> {
        self.time_delta
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
