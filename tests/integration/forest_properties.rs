use imgtree::error::ForestError;
use imgtree::store::ImageRecord;
use imgtree::tree::ordering::sort_nodes;
use imgtree::tree::{Forest, Node};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeSet;

use crate::integration::support::{image_id, record};

/// Acyclic records: a node may only point at an earlier node.
fn arb_records() -> impl Strategy<Value = Vec<ImageRecord>> {
    prop::collection::vec(
        (
            any::<Index>(),
            any::<bool>(),
            prop::option::of(0usize..3),
            0u64..50_000_000,
            0i64..200_000,
        ),
        1..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(n, (parent, has_parent, tag, size, seconds))| {
                let parent = (n > 0 && has_parent).then(|| parent.index(n));
                let tags = match tag {
                    Some(0) => vec![format!("img{}:latest", n)],
                    Some(t) => vec![format!("img{}:v{}", n, t), format!("img{}:latest", n)],
                    None => Vec::new(),
                };
                record(n, parent, tags, size, seconds)
            })
            .collect()
    })
}

fn id_set<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> BTreeSet<String> {
    nodes.into_iter().map(|n| n.id().to_string()).collect()
}

fn assert_sorted(nodes: &[&Node]) {
    for pair in nodes.windows(2) {
        assert!(pair[0].sort_key() <= pair[1].sort_key());
        assert!(pair[0].has_tags() || !pair[1].has_tags(), "untagged before tagged");
    }
    let mut again = nodes.to_vec();
    sort_nodes(&mut again);
    let before: Vec<&str> = nodes.iter().map(|n| n.id()).collect();
    let after: Vec<&str> = again.iter().map(|n| n.id()).collect();
    assert_eq!(before, after);
}

proptest! {
    #[test]
    fn links_round_trip(records in arb_records()) {
        let forest = Forest::build(records.clone()).unwrap();
        prop_assert_eq!(forest.len(), records.len());

        let mut child_links = 0;
        for node in forest.iter() {
            match node.parent_id() {
                Some(parent_id) => {
                    let parent = forest.parent(node).unwrap();
                    prop_assert_eq!(parent.id(), parent_id);
                    prop_assert!(forest.children(parent).any(|c| c.id() == node.id()));
                }
                None => prop_assert!(forest.parent(node).is_none()),
            }
            for child in forest.children(node) {
                prop_assert_eq!(child.parent_id(), Some(node.id()));
                child_links += 1;
            }
        }
        let with_parent = forest.iter().filter(|n| n.has_parent()).count();
        prop_assert_eq!(child_links, with_parent);
    }

    #[test]
    fn subgraph_is_family_and_fixed_point(records in arb_records(), pick in any::<Index>()) {
        let forest = Forest::build(records.clone()).unwrap();
        let target = image_id(pick.index(records.len()));
        let node = forest.get(&target).unwrap();

        let mut expected = id_set(forest.ancestors(node));
        expected.extend(id_set(forest.descendants(node)));
        expected.insert(target.clone());

        let sub = forest.extract_subgraph(&[target.clone()]).unwrap();
        prop_assert_eq!(id_set(sub.iter()), expected.clone());

        let again = sub.extract_subgraph(&[target.clone()]).unwrap();
        prop_assert_eq!(id_set(again.iter()), expected);
    }

    #[test]
    fn listings_are_sorted(records in arb_records()) {
        let forest = Forest::build(records).unwrap();
        assert_sorted(&forest.roots());
        assert_sorted(&forest.leaves());
        for node in forest.iter() {
            let children: Vec<&Node> = forest.children(node).collect();
            assert_sorted(&children);
        }
    }

    #[test]
    fn ancestors_end_at_a_root(records in arb_records(), pick in any::<Index>()) {
        let forest = Forest::build(records.clone()).unwrap();
        let node = forest.get(&image_id(pick.index(records.len()))).unwrap();
        let ancestors = forest.ancestors(node);
        match ancestors.first() {
            Some(first) => prop_assert!(!first.has_parent()),
            None => prop_assert!(!node.has_parent()),
        }
        if let Some(last) = ancestors.last() {
            prop_assert_eq!(Some(last.id()), node.parent_id());
        }
    }
}

#[test]
fn dangling_parent_fails_build() {
    let records = vec![record(1, Some(7), Vec::new(), 10, 0)];
    let err = Forest::build(records).unwrap_err();
    assert!(matches!(err, ForestError::DanglingReference { .. }));
}

#[test]
fn three_generation_chain_renders_nested() {
    use imgtree::render::{RenderOptions, TreeRenderer};
    use std::collections::HashSet;

    let forest = Forest::build(vec![
        record(1, None, Vec::new(), 1_000, 0),
        record(2, Some(1), Vec::new(), 1_000, 0),
        record(3, Some(2), Vec::new(), 1_000, 0),
    ])
    .unwrap();
    let output = TreeRenderer::new(&forest, RenderOptions::default()).render_forest(&HashSet::new());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("000000000000: "));
    assert_eq!(lines[1], "└───000000000000");
    assert_eq!(lines[2], "    └───000000000000");
}
