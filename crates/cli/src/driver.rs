// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading a store's record files and running them through a [`Converter`].

use std::fs;
use std::path::Path;

use d2b_core::{Converter, Element, IdSource, Record};
use tracing::debug;

use crate::discover::RecordFiles;
use crate::error::{Error, Result};

/// Read, repair, and parse one record file.
pub fn read_record(path: &Path) -> Result<Record> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} ({} bytes)", path.display(), raw.len());
    let record = Record::from_ditz(&raw).map_err(in_file(path))?;
    debug!("parsed {} record from {}", record.kind(), path.display());
    Ok(record)
}

/// Convert every record in `files` into a `be-xml` element tree.
///
/// The project is declared before any issue is added so that declared
/// releases keep their project order and status.
pub fn convert(files: &RecordFiles, ids: impl IdSource) -> Result<Element> {
    let mut converter = Converter::with_ids(ids);

    if let Some(path) = &files.project {
        let project = read_record(path)?.into_project().map_err(in_file(path))?;
        converter.declare_project(&project).map_err(in_file(path))?;
    }

    for path in &files.issues {
        let issue = read_record(path)?.into_issue().map_err(in_file(path))?;
        converter.add_issue(&issue).map_err(in_file(path))?;
    }

    Ok(converter.finish())
}

fn in_file(path: &Path) -> impl Fn(d2b_core::Error) -> Error + '_ {
    move |source| Error::Record {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
