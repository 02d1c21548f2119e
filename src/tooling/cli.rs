//! CLI Tooling
//!
//! Argument definitions and the context that turns a parsed command line into
//! rendered output. The context owns its record source and configuration;
//! nothing here is global.

use crate::config::ImgtreeConfig;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::render::{RenderOptions, TreeRenderer};
use crate::store::{DockerCli, RecordSource, SnapshotSource};
use crate::tree::Forest;
use crate::types::ImageId;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Shows docker image family tree.
#[derive(Parser, Debug)]
#[command(name = "imgtree", version)]
#[command(about = "Shows docker image family tree.")]
pub struct Cli {
    /// Show only "root" images
    #[arg(short = 'r', long = "roots", conflicts_with_all = ["leafs", "always_indent"])]
    pub roots: bool,

    /// Show only "leaf" images
    #[arg(short = 'l', long = "leafs", conflicts_with = "always_indent")]
    pub leafs: bool,

    /// Always show indented tree
    #[arg(short = 'I', long = "always-indent")]
    pub always_indent: bool,

    /// Do NOT truncate image id's
    #[arg(short = 'N', long = "no-trunc")]
    pub no_trunc: bool,

    /// Show the family tree of particular images
    #[arg(value_name = "IMAGE")]
    pub targets: Vec<String>,

    /// Read a saved `docker inspect` JSON array instead of querying docker
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging config with command-line overrides applied.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }

    /// The view this command line asks for, with config defaults folded in.
    pub fn view_request(&self, config: &ImgtreeConfig) -> ViewRequest {
        let mode = if self.roots {
            ViewMode::Roots
        } else if self.leafs {
            ViewMode::Leaves
        } else {
            ViewMode::Tree
        };
        ViewRequest {
            mode,
            always_indent: self.always_indent || config.display.always_indent,
            no_trunc: self.no_trunc || config.display.no_trunc,
            targets: self.targets.clone(),
        }
    }
}

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Indented family tree
    Tree,
    /// Flat list of root images
    Roots,
    /// Flat list of leaf images
    Leaves,
}

/// A single rendering request.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub mode: ViewMode,
    pub always_indent: bool,
    pub no_trunc: bool,
    /// Ids or tags; empty means the whole forest
    pub targets: Vec<String>,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            mode: ViewMode::Tree,
            always_indent: false,
            no_trunc: false,
            targets: Vec::new(),
        }
    }
}

/// CLI context: a record source plus loaded configuration.
pub struct CliContext {
    source: Box<dyn RecordSource>,
    config: ImgtreeConfig,
}

impl CliContext {
    pub fn new(source: Box<dyn RecordSource>, config: ImgtreeConfig) -> Self {
        Self { source, config }
    }

    /// Pick the record source for `cli` using an already loaded config.
    pub fn with_config(cli: &Cli, config: ImgtreeConfig) -> Result<Self, ApiError> {
        let source: Box<dyn RecordSource> = match &cli.input {
            Some(path) => Box::new(SnapshotSource::from_path(path)?),
            None => Box::new(DockerCli::new(config.docker.binary.clone())),
        };
        Ok(Self::new(source, config))
    }

    /// Fetch records, narrow to the requested targets and render.
    pub fn execute(&self, request: &ViewRequest) -> Result<String, ApiError> {
        let forest = Forest::build(self.source.fetch_records()?)?;
        info!(images = forest.len(), mode = ?request.mode, "Rendering image forest");

        if request.targets.is_empty() {
            return Ok(self.present(&forest, &[], request));
        }
        let target_ids = self.source.resolve_ids(&request.targets)?;
        debug!(targets = ?target_ids, "Resolved targets");
        let subgraph = forest.extract_subgraph(&target_ids)?;
        if request.mode == ViewMode::Tree && !request.always_indent && target_ids.len() == 1 {
            let options = self.render_options(request, false);
            let renderer = TreeRenderer::new(&subgraph, options);
            let target = subgraph.get(&target_ids[0])?;
            let highlighted: HashSet<ImageId> = target_ids.iter().cloned().collect();
            return Ok(renderer.render_single_target(target, &highlighted));
        }
        Ok(self.present(&subgraph, &target_ids, request))
    }

    fn render_options(&self, request: &ViewRequest, flat: bool) -> RenderOptions {
        RenderOptions {
            no_trunc: request.no_trunc,
            id_width: self.config.display.id_width,
            flat,
        }
    }

    fn present(&self, forest: &Forest, target_ids: &[ImageId], request: &ViewRequest) -> String {
        let flat = request.mode != ViewMode::Tree;
        let renderer = TreeRenderer::new(forest, self.render_options(request, flat));
        match request.mode {
            ViewMode::Roots => renderer.render_list(&forest.roots()),
            ViewMode::Leaves => renderer.render_list(&forest.leaves()),
            ViewMode::Tree => {
                let highlighted: HashSet<ImageId> = target_ids.iter().cloned().collect();
                renderer.render_forest(&highlighted)
            }
        }
    }
}
