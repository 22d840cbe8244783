// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::Parser;

const AFTER_HELP: &str = "\
Input directory:
  DIR, then $DITZ_DIR, then ./.ditz

Examples:
  ditz2be > be.xml                Convert ./.ditz
  ditz2be bugs/.ditz > be.xml     Convert another store
  RUST_LOG=debug ditz2be          Log each record to stderr";

#[derive(Parser, Debug)]
#[command(name = "ditz2be")]
#[command(version)]
#[command(about = "Convert a Ditz issue store into a Bugs Everywhere XML import file")]
#[command(
    long_about = "Convert a Ditz issue store into a Bugs Everywhere XML import file.\n\n\
    Reads project.yaml and every issue*.yaml in the store, repairs the YAML dialect \
    quirks of old Ditz writers, and prints one be-xml document to stdout."
)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Ditz store holding project.yaml and issue-*.yaml
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
