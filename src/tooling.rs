//! Tooling & Integration Layer
//!
//! Command-line surface of the image tree viewer.

pub mod cli;

pub use cli::{Cli, CliContext, ViewMode, ViewRequest};
