// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the record files of a Ditz store.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// File name of the project record.
pub const PROJECT_FILE: &str = "project.yaml";

/// Pattern matching issue records inside the store.
pub const ISSUE_PATTERN: &str = "issue*.yaml";

/// The record files found in one store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFiles {
    /// `project.yaml`, when the store has one.
    pub project: Option<PathBuf>,
    /// Issue records sorted by file name.
    pub issues: Vec<PathBuf>,
}

/// List the project and issue records in `dir`.
pub fn discover(dir: &Path) -> Result<RecordFiles> {
    if !dir.is_dir() {
        return Err(Error::InputDirNotFound(dir.to_path_buf()));
    }
    let dir_str = dir
        .to_str()
        .ok_or_else(|| Error::InvalidPath(dir.to_path_buf()))?;

    let pattern = format!("{}/{}", glob::Pattern::escape(dir_str), ISSUE_PATTERN);
    let mut issues = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            issues.push(path);
        }
    }
    issues.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let project = dir.join(PROJECT_FILE);
    let project = project.is_file().then_some(project);

    debug!(
        "found {} issue file(s) in {}, project record {}",
        issues.len(),
        dir.display(),
        if project.is_some() { "present" } else { "absent" }
    );
    Ok(RecordFiles { project, issues })
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
