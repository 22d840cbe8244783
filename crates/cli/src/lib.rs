// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! d2b - convert a Ditz issue store into a Bugs Everywhere XML import file.
//!
//! # Main Components
//!
//! - [`mod@discover`] - locating `project.yaml` and the `issue*.yaml` records
//! - [`driver`] - reading, repairing, and converting the records
//! - [`Error`] - error types for all operations
//!
//! The record model and the XML conversion live in `d2b_core`.

mod cli;
pub mod discover;
pub mod driver;
pub mod env;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use discover::{discover, RecordFiles};
pub use error::{Error, Result};

use std::io::Write;
use std::path::PathBuf;

use d2b_core::xml::render;
use d2b_core::RandomIds;

/// Pick the input directory: `DIR`, then `DITZ_DIR`, then `.ditz`.
pub fn resolve_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(env::ditz_dir)
        .unwrap_or_else(|| PathBuf::from(env::DEFAULT_DITZ_DIR))
}

/// Convert the store named by `cli` and print the document.
///
/// The whole document is rendered before anything is written, so a failed
/// run leaves stdout empty.
pub fn run(cli: Cli) -> Result<()> {
    let dir = resolve_dir(cli.dir);
    let files = discover(&dir)?;
    let root = driver::convert(&files, RandomIds)?;
    let doc = render(&root);

    let mut out = std::io::stdout().lock();
    out.write_all(doc.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
