//! Integration tests for the image family tree viewer

mod cli_output;
mod cli_parse;
mod forest_properties;
mod support;
