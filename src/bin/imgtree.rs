//! imgtree CLI Binary
//!
//! Prints the family tree of local docker images.

use clap::error::ErrorKind;
use clap::Parser;
use imgtree::config::ConfigLoader;
use imgtree::error::ApiError;
use imgtree::logging::init_logging;
use imgtree::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> Result<String, ApiError> {
    let config = ConfigLoader::load(cli.config.as_deref())?;
    init_logging(&cli.logging_config(&config.logging))?;
    let request = cli.view_request(&config);
    let context = CliContext::with_config(cli, config)?;
    context.execute(&request)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let message = e.to_string();
            let message = message.trim_end().trim_start_matches("error: ");
            eprintln!("Error: {}", ApiError::InvalidArguments(message.to_string()));
            process::exit(1);
        }
    };

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
