//! Image forest: nodes indexed by id with resolved parent/child links.

use super::node::Node;
use super::ordering::sort_nodes;
use crate::error::ForestError;
use crate::store::ImageRecord;
use crate::types::ImageId;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Indexed collection of nodes.
///
/// Every `parent_id` resolves inside the forest and every child list is sorted.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<Node>,
    index: HashMap<ImageId, usize>,
}

impl Forest {
    /// Build a forest from raw records.
    ///
    /// A repeated id replaces the earlier record in place. Fails with
    /// `DanglingReference` if a parent id is not among the records.
    pub fn build<I>(records: I) -> Result<Self, ForestError>
    where
        I: IntoIterator<Item = ImageRecord>,
    {
        let mut nodes: Vec<Node> = Vec::new();
        let mut index: HashMap<ImageId, usize> = HashMap::new();
        for record in records {
            let node = Node::from_record(record)?;
            match index.get(node.id()).copied() {
                Some(slot) => nodes[slot] = node,
                None => {
                    index.insert(node.id().to_string(), nodes.len());
                    nodes.push(node);
                }
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut parents: Vec<Option<usize>> = vec![None; nodes.len()];
        for (slot, node) in nodes.iter().enumerate() {
            if let Some(parent_id) = node.parent_id() {
                let parent = *index
                    .get(parent_id)
                    .ok_or_else(|| ForestError::DanglingReference {
                        child: node.id().to_string(),
                        parent: parent_id.to_string(),
                    })?;
                parents[slot] = Some(parent);
                children[parent].push(slot);
            }
        }

        for list in children.iter_mut() {
            list.sort_by(|&a, &b| nodes[a].sort_key().cmp(nodes[b].sort_key()));
        }

        for slot in 0..nodes.len() {
            let deltas = parents[slot].map(|p| {
                let (node, parent) = (&nodes[slot], &nodes[p]);
                (
                    node.size() as i64 - parent.size() as i64,
                    *node.created() - *parent.created(),
                )
            });
            let node = &mut nodes[slot];
            node.parent = parents[slot];
            node.children = std::mem::take(&mut children[slot]);
            node.size_delta = deltas.map(|(size, _)| size);
            node.time_delta = deltas.map(|(_, time)| time);
        }

        let forest = Forest { nodes, index };
        debug!(
            nodes = forest.len(),
            roots = forest.roots().len(),
            "Built image forest"
        );
        Ok(forest)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Look up a node by normalized id.
    pub fn get(&self, id: &str) -> Result<&Node, ForestError> {
        self.index
            .get(id)
            .map(|&slot| &self.nodes[slot])
            .ok_or_else(|| ForestError::NotFound(id.to_string()))
    }

    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent.map(|slot| &self.nodes[slot])
    }

    /// Children in global order.
    pub fn children<'a>(&'a self, node: &'a Node) -> impl ExactSizeIterator<Item = &'a Node> + 'a {
        node.children.iter().map(move |&slot| &self.nodes[slot])
    }

    /// Nodes without a parent, sorted.
    pub fn roots(&self) -> Vec<&Node> {
        let mut roots: Vec<&Node> = self.nodes.iter().filter(|n| !n.has_parent()).collect();
        sort_nodes(&mut roots);
        roots
    }

    /// Nodes without children, sorted.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut leaves: Vec<&Node> = self.nodes.iter().filter(|n| !n.has_children()).collect();
        sort_nodes(&mut leaves);
        leaves
    }

    /// Strict ancestors of `node`, root first.
    pub fn ancestors(&self, node: &Node) -> Vec<&Node> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if !seen.insert(parent.id()) {
                break;
            }
            chain.push(parent);
            current = self.parent(parent);
        }
        chain.reverse();
        chain
    }

    /// Strict descendants of `node` in pre-order.
    pub fn descendants(&self, node: &Node) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut stack: Vec<usize> = node.children.iter().rev().copied().collect();
        while let Some(slot) = stack.pop() {
            let child = &self.nodes[slot];
            if !seen.insert(slot) {
                continue;
            }
            out.push(child);
            stack.extend(child.children.iter().rev().copied());
        }
        out
    }

    /// New forest holding each target with its ancestors and descendants.
    ///
    /// Records are cloned, so the result is independent of `self`.
    pub fn extract_subgraph(&self, target_ids: &[ImageId]) -> Result<Forest, ForestError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut selected: Vec<&Node> = Vec::new();
        for id in target_ids {
            let target = self.get(id)?;
            let family = std::iter::once(target)
                .chain(self.ancestors(target))
                .chain(self.descendants(target));
            for node in family {
                if seen.insert(node.id()) {
                    selected.push(node);
                }
            }
        }
        debug!(
            targets = target_ids.len(),
            selected = selected.len(),
            "Extracting subgraph"
        );
        Forest::build(selected.into_iter().map(|n| n.record().clone()))
    }
}
