//! ASCII tree rendering of an image forest.

use super::pretty::{format_relative_time, format_size, TIME_HIDE_LIMIT_US};
use crate::tree::{Forest, Node};
use crate::types::{short_id, ImageId, SHORT_ID_LEN};
use std::collections::HashSet;

const MIDDLE_PREFIX: &str = "│   ";
const LAST_PREFIX: &str = "    ";
const MIDDLE_BRANCH: &str = "├───";
const LAST_BRANCH: &str = "└───";
const MIDDLE_HIGHLIGHT: &str = "├─• ";
const LAST_HIGHLIGHT: &str = "└─• ";
const ROOT_BULLET: &str = "• ";

/// Label options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show full ids instead of the first `id_width` characters
    pub no_trunc: bool,
    pub id_width: usize,
    /// Flat listing (roots/leaves): absolute time and size on every label
    pub flat: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            no_trunc: false,
            id_width: SHORT_ID_LEN,
            flat: false,
        }
    }
}

/// Renders nodes of one forest.
pub struct TreeRenderer<'a> {
    forest: &'a Forest,
    options: RenderOptions,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(forest: &'a Forest, options: RenderOptions) -> Self {
        Self { forest, options }
    }

    /// Node label with its time and size decorations.
    pub fn label(&self, node: &Node) -> String {
        let name = if node.has_tags() {
            node.sorted_tags().join(",")
        } else if self.options.no_trunc {
            node.id().to_string()
        } else {
            short_id(node.id(), self.options.id_width).to_string()
        };

        let flat = self.options.flat;
        let mut decorations = Vec::new();
        let time_visible = node
            .time_delta()
            .map_or(true, |d| d.num_microseconds().map_or(true, |us| us > TIME_HIDE_LIMIT_US));
        if time_visible || flat {
            decorations.push(format_relative_time(node.time_delta(), node.created(), flat));
        }
        match node.size_delta() {
            _ if !node.has_parent() || flat => {
                decorations.push(format_size(i64::try_from(node.size()).unwrap_or(i64::MAX)))
            }
            Some(delta) if delta != 0 => decorations.push(format!("+{}", format_size(delta))),
            _ => {}
        }

        if decorations.is_empty() {
            name
        } else {
            format!("{}: {}", name, decorations.join(", "))
        }
    }

    /// One label per line, for roots/leaves listings.
    pub fn render_list(&self, nodes: &[&Node]) -> String {
        nodes
            .iter()
            .map(|node| self.label(node))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every root with its subtree; highlighted nodes get bullet connectors.
    pub fn render_forest(&self, highlighted: &HashSet<ImageId>) -> String {
        self.forest
            .roots()
            .into_iter()
            .map(|root| {
                if highlighted.contains(root.id()) {
                    self.render_subtree(root, "  ", ROOT_BULLET, highlighted)
                } else {
                    self.render_subtree(root, "", "", highlighted)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `branch` + label, then each child on its own line under `prefix`.
    pub fn render_subtree(
        &self,
        node: &Node,
        prefix: &str,
        branch: &str,
        highlighted: &HashSet<ImageId>,
    ) -> String {
        let mut buffer = format!("{}{}", branch, self.label(node));
        let children = self.forest.children(node);
        let last = children.len().saturating_sub(1);
        for (position, child) in children.enumerate() {
            let is_last = position == last;
            let is_highlighted = highlighted.contains(child.id());
            let (sub_prefix, sub_branch) = match (is_last, is_highlighted) {
                (true, true) => (LAST_PREFIX, LAST_HIGHLIGHT),
                (true, false) => (LAST_PREFIX, LAST_BRANCH),
                (false, true) => (MIDDLE_PREFIX, MIDDLE_HIGHLIGHT),
                (false, false) => (MIDDLE_PREFIX, MIDDLE_BRANCH),
            };
            let rendered = self.render_subtree(
                child,
                &format!("{}{}", prefix, sub_prefix),
                sub_branch,
                highlighted,
            );
            buffer.push('\n');
            buffer.push_str(prefix);
            buffer.push_str(&rendered);
        }
        buffer
    }

    /// Ancestor chain of `node` above it, then `node` with its subtree.
    pub fn render_single_target(&self, node: &Node, highlighted: &HashSet<ImageId>) -> String {
        let ancestors = self.forest.ancestors(node);
        let Some((first, rest)) = ancestors.split_first() else {
            return format!(
                "{}{}",
                ROOT_BULLET,
                self.render_subtree(node, "  ", "", highlighted)
            );
        };

        let mut buffer = format!("┌─{}", self.label(first));
        for ancestor in rest {
            buffer.push_str("\n├─");
            buffer.push_str(&self.label(ancestor));
        }
        buffer.push_str("\n└─• ");
        buffer.push_str(&self.render_subtree(node, "    ", "", highlighted));
        buffer
    }
}
