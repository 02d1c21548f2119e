//! Global node ordering.
//!
//! Every sorted listing (children, roots, leaves) uses one string key per node:
//! tagged nodes get `A` followed by their sorted tags, untagged nodes get `B`
//! followed by their fixed-width creation time. Tagged nodes therefore always
//! precede untagged ones, and untagged nodes sort by creation time.

use super::node::Node;
use chrono::{DateTime, FixedOffset};

/// Tags ending with this suffix sort before all other tags.
pub const LATEST_SUFFIX: &str = ":latest";

const TAGGED_PREFIX: char = 'A';
const UNTAGGED_PREFIX: char = 'B';
const KEY_TIME_FORMAT: &str = "%Y%m%d%H%M%S%6f";

fn tag_rank(tag: &str) -> (bool, &str) {
    (!tag.ends_with(LATEST_SUFFIX), tag)
}

/// Tags ordered `:latest` first, then lexicographically.
pub fn sort_tags(tags: &[String]) -> Vec<String> {
    let mut sorted = tags.to_vec();
    sorted.sort_by(|a, b| tag_rank(a).cmp(&tag_rank(b)));
    sorted
}

/// Sort key for a node with the given tags and creation time.
pub fn sort_key(tags: &[String], created: &DateTime<FixedOffset>) -> String {
    if tags.is_empty() {
        format!("{}{}", UNTAGGED_PREFIX, created.format(KEY_TIME_FORMAT))
    } else {
        format!("{}{}", TAGGED_PREFIX, sort_tags(tags).join(","))
    }
}

/// Stable sort of nodes by their sort key.
pub fn sort_nodes(nodes: &mut [&Node]) {
    nodes.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}
