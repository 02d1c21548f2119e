//! imgtree: Docker Image Family Trees
//!
//! Rebuilds the parent/child forest of local images from their flat metadata
//! records and renders it, or the family of selected images, as an annotated
//! ASCII tree with size and time deltas.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;
