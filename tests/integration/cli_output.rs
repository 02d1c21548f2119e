use imgtree::error::{ApiError, SourceError};
use imgtree::tooling::cli::{ViewMode, ViewRequest};

use crate::integration::support::fixture_context;

fn request(mode: ViewMode, targets: &[&str]) -> ViewRequest {
    ViewRequest {
        mode,
        targets: targets.iter().map(|t| t.to_string()).collect(),
        ..ViewRequest::default()
    }
}

#[test]
fn full_forest_tree() {
    let output = fixture_context()
        .execute(&request(ViewMode::Tree, &[]))
        .unwrap();
    let expected = [
        "base:latest: 2023.01.01 10:00:00, 95M",
        "├───tools:dev: 2023.01.01 12:30:00, +0.5K",
        "└───bbbbbbbbbbbb: +5s, +48M",
        "    └───app:latest,app:1.0: +1:30",
        "eeeeeeeeeeee: 2022.06.01 08:00:00, 4.9K",
        "└───ffffffffffff",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn roots_listing_is_flat() {
    let output = fixture_context()
        .execute(&request(ViewMode::Roots, &[]))
        .unwrap();
    assert_eq!(
        output,
        "base:latest: 2023.01.01 10:00:00, 95M\neeeeeeeeeeee: 2022.06.01 08:00:00, 4.9K"
    );
}

#[test]
fn leaves_listing_tagged_first() {
    let output = fixture_context()
        .execute(&request(ViewMode::Leaves, &[]))
        .unwrap();
    let expected = [
        "app:latest,app:1.0: 2023.01.01 10:01:35, 143M",
        "tools:dev: 2023.01.01 12:30:00, 95M",
        "ffffffffffff: 2022.06.01 08:00:00, 4.9K",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn single_target_shows_ancestor_chain() {
    let output = fixture_context()
        .execute(&request(ViewMode::Tree, &["app:latest"]))
        .unwrap();
    let expected = [
        "┌─base:latest: 2023.01.01 10:00:00, 95M",
        "├─bbbbbbbbbbbb: +5s, +48M",
        "└─• app:latest,app:1.0: +1:30",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn single_root_target_shows_subtree_only() {
    let output = fixture_context()
        .execute(&request(ViewMode::Tree, &["base"]))
        .unwrap();
    let expected = [
        "• base:latest: 2023.01.01 10:00:00, 95M",
        "  ├───tools:dev: 2023.01.01 12:30:00, +0.5K",
        "  └───bbbbbbbbbbbb: +5s, +48M",
        "      └───app:latest,app:1.0: +1:30",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn always_indent_highlights_target() {
    let mut req = request(ViewMode::Tree, &["bbbbbbbbbbbb"]);
    req.always_indent = true;
    let output = fixture_context().execute(&req).unwrap();
    let expected = [
        "base:latest: 2023.01.01 10:00:00, 95M",
        "└─• bbbbbbbbbbbb: +5s, +48M",
        "    └───app:latest,app:1.0: +1:30",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn multiple_targets_render_highlighted_forest() {
    let output = fixture_context()
        .execute(&request(ViewMode::Tree, &["tools:dev", "ffffffffffff"]))
        .unwrap();
    let expected = [
        "base:latest: 2023.01.01 10:00:00, 95M",
        "└─• tools:dev: 2023.01.01 12:30:00, +0.5K",
        "eeeeeeeeeeee: 2022.06.01 08:00:00, 4.9K",
        "└─• ffffffffffff",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

#[test]
fn roots_of_subgraph() {
    let output = fixture_context()
        .execute(&request(ViewMode::Roots, &["app:1.0"]))
        .unwrap();
    assert_eq!(output, "base:latest: 2023.01.01 10:00:00, 95M");
}

#[test]
fn no_trunc_shows_full_ids() {
    let mut req = request(ViewMode::Tree, &["ffffffffffff"]);
    req.no_trunc = true;
    let output = fixture_context().execute(&req).unwrap();
    assert_eq!(
        output,
        format!(
            "┌─{}: 2022.06.01 08:00:00, 4.9K\n└─• {}",
            "e".repeat(64),
            "f".repeat(64)
        )
    );
}

#[test]
fn unknown_target_is_an_error() {
    let err = fixture_context()
        .execute(&request(ViewMode::Tree, &["nginx:1.25"]))
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Source(SourceError::UnknownImage(ref target)) if target == "nginx:1.25"
    ));
    assert_eq!(err.to_string(), "No such image: nginx:1.25");
}
