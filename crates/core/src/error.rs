// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for d2b-core operations.

use thiserror::Error;

/// All possible errors that can occur while converting records.
///
/// Every variant is fatal to a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid byte escape run '{escape}': {reason}")]
    InvalidByteEscape { escape: String, reason: String },

    #[error("unknown issue status: '{0}'\n  hint: known statuses are: unstarted, paused, in_progress, closed")]
    UnknownIssueStatus(String),

    #[error("unknown release status: '{0}'\n  hint: known statuses are: unreleased, released")]
    UnknownReleaseStatus(String),

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("unknown record tag: '{0}'\n  hint: expected a !ditz.rubyforge.org,2008-03-06/<kind> record")]
    UnknownRecordTag(String),

    #[error("expected {expected} record, found {found}")]
    UnexpectedRecord { expected: &'static str, found: String },

    #[error("{record} record is missing required field '{field}'")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("invalid {record} field '{field}': {reason}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("release '{0}' is declared more than once")]
    DuplicateRelease(String),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for d2b-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
