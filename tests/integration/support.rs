use chrono::{Duration, NaiveDate};
use imgtree::config::ImgtreeConfig;
use imgtree::store::{ImageRecord, SnapshotSource};
use imgtree::tooling::cli::CliContext;
use std::path::PathBuf;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/images.json")
}

/// Context reading the bundled snapshot with default configuration.
pub fn fixture_context() -> CliContext {
    let source = SnapshotSource::from_path(&fixture_path()).unwrap();
    CliContext::new(Box::new(source), ImgtreeConfig::default())
}

pub fn image_id(n: usize) -> String {
    format!("{:064x}", n)
}

/// Creation time `seconds` after 2023-01-01T00:00:00, in docker's nanosecond shape.
pub fn created_at(seconds: i64) -> String {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    format!(
        "{}Z",
        (base + Duration::seconds(seconds)).format("%Y-%m-%dT%H:%M:%S%.9f")
    )
}

pub fn record(n: usize, parent: Option<usize>, tags: Vec<String>, size: u64, seconds: i64) -> ImageRecord {
    ImageRecord {
        id: format!("sha256:{}", image_id(n)),
        parent: Some(parent.map(|p| format!("sha256:{}", image_id(p))).unwrap_or_default()),
        repo_tags: Some(tags),
        size,
        created: created_at(seconds),
    }
}
