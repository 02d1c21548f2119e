//! Text rendering of image forests.

pub mod pretty;
pub mod tree;

pub use pretty::{format_relative_time, format_size};
pub use tree::{RenderOptions, TreeRenderer};
