//! Tests for the links subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_links() {
    match parse(&["coinlinks", "links", "bitcoin.json"]) {
        CliCommand::Links {
            path,
            json,
            links_only,
        } => {
            assert_eq!(path, "bitcoin.json");
            assert!(!json);
            assert!(!links_only);
        }
        _ => panic!("expected Links"),
    }
}

#[test]
fn cli_parse_links_stdin_json() {
    match parse(&["coinlinks", "links", "-", "--json", "--links-only"]) {
        CliCommand::Links {
            path,
            json,
            links_only,
        } => {
            assert_eq!(path, "-");
            assert!(json);
            assert!(links_only);
        }
        _ => panic!("expected Links with --json --links-only"),
    }
}

#[test]
fn cli_parse_links_requires_path() {
    assert!(Cli::try_parse_from(["coinlinks", "links"]).is_err());
}
