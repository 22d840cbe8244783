// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, reading, and converting a Ditz store.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input directory not found: {}\n  hint: pass the ditz store as DIR or set DITZ_DIR", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Record {
        path: PathBuf,
        source: d2b_core::Error,
    },

    #[error("input directory is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot list input directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
