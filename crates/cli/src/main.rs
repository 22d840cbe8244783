// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use d2b::Cli;

fn main() {
    let cli = Cli::parse();
    d2b::logging::setup_logging();
    if let Err(e) = d2b::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
