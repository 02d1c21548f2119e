use clap::{CommandFactory, Parser};
use imgtree::config::ImgtreeConfig;
use imgtree::tooling::cli::{Cli, CliContext, ViewMode};

use crate::integration::support::fixture_path;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["imgtree"],
        vec!["imgtree", "-r"],
        vec!["imgtree", "--leafs"],
        vec!["imgtree", "-I", "web:latest", "db"],
        vec!["imgtree", "-N", "-l", "web"],
        vec!["imgtree", "--input", "images.json", "--verbose"],
        vec!["imgtree", "--log-level", "trace", "--log-output", "both"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_conflicting_modes() {
    for args in [
        vec!["imgtree", "--roots", "--leafs"],
        vec!["imgtree", "--roots", "--always-indent"],
        vec!["imgtree", "-l", "-I", "web"],
    ] {
        assert!(Cli::try_parse_from(args.clone()).is_err(), "expected conflict for {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["imgtree", "--tree"]).is_err());
}

#[test]
fn help_lists_short_flags() {
    let mut output = Vec::new();
    Cli::command().write_long_help(&mut output).unwrap();
    let help = String::from_utf8(output).unwrap();
    for token in ["--roots", "--leafs", "--always-indent", "--no-trunc", "--input"] {
        assert!(help.contains(token), "help should mention {token}");
    }
}

#[test]
fn input_flag_selects_snapshot_source() {
    let path = fixture_path();
    let cli = Cli::try_parse_from([
        "imgtree",
        "--roots",
        "--input",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let config = ImgtreeConfig::default();
    let request = cli.view_request(&config);
    assert_eq!(request.mode, ViewMode::Roots);

    let context = CliContext::with_config(&cli, config).unwrap();
    let output = context.execute(&request).unwrap();
    assert_eq!(output.lines().count(), 2);
}

#[test]
fn missing_input_file_is_reported() {
    let cli = Cli::try_parse_from(["imgtree", "--input", "/nonexistent/imgtree.json"]).unwrap();
    let err = CliContext::with_config(&cli, ImgtreeConfig::default())
        .err()
        .expect("missing snapshot should fail");
    assert!(err.to_string().contains("/nonexistent/imgtree.json"));
}
