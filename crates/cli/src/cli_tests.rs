// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_dir() {
    let cli = parse(&["ditz2be"]).unwrap();
    assert_eq!(cli.dir, None);
}

#[test]
fn test_dir_argument() {
    let cli = parse(&["ditz2be", "bugs/.ditz"]).unwrap();
    assert_eq!(cli.dir, Some(PathBuf::from("bugs/.ditz")));
}

#[test]
fn test_extra_argument_rejected() {
    assert!(parse(&["ditz2be", "a", "b"]).is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(parse(&["ditz2be", "--json"]).is_err());
}
