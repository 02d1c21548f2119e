//! Core types shared across the forest, renderer and record sources.

/// ImageId: content digest with its algorithm prefix removed (lowercase hex).
pub type ImageId = String;

/// Default number of id characters shown when ids are truncated.
pub const SHORT_ID_LEN: usize = 12;

/// Strip the algorithm prefix (`sha256:`) from a digest.
pub fn normalize_digest(digest: &str) -> ImageId {
    let digest = digest.trim();
    match digest.split_once(':') {
        Some((_, hex)) => hex.to_string(),
        None => digest.to_string(),
    }
}

/// First `width` characters of an id.
pub fn short_id(id: &str, width: usize) -> &str {
    id.get(..width).unwrap_or(id)
}
