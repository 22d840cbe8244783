// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status vocabularies.
//!
//! Ditz and Bugs Everywhere use different status words. Both Ditz
//! vocabularies are closed: a value outside them means the record format
//! changed, so parsing fails instead of guessing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Ditz writes enumerations as Ruby symbols (`:closed`).
fn symbol_name(s: &str) -> &str {
    s.strip_prefix(':').unwrap_or(s)
}

/// Workflow status of a Ditz issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    Unstarted,
    Paused,
    InProgress,
    Closed,
}

impl IssueStatus {
    /// Returns the Ditz symbol name, without the leading colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Unstarted => "unstarted",
            IssueStatus::Paused => "paused",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Closed => "closed",
        }
    }

    /// Translate to the Bugs Everywhere status.
    pub fn target(&self) -> TargetStatus {
        match self {
            IssueStatus::Unstarted | IssueStatus::Paused | IssueStatus::InProgress => {
                TargetStatus::Open
            }
            IssueStatus::Closed => TargetStatus::Fixed,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match symbol_name(s) {
            "unstarted" => Ok(IssueStatus::Unstarted),
            "paused" => Ok(IssueStatus::Paused),
            "in_progress" => Ok(IssueStatus::InProgress),
            "closed" => Ok(IssueStatus::Closed),
            _ => Err(Error::UnknownIssueStatus(s.to_string())),
        }
    }
}

/// Status of a Ditz release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    Unreleased,
    Released,
}

impl ReleaseStatus {
    /// Returns the Ditz symbol name, without the leading colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Unreleased => "unreleased",
            ReleaseStatus::Released => "released",
        }
    }

    /// Translate to the Bugs Everywhere status.
    pub fn target(&self) -> TargetStatus {
        match self {
            ReleaseStatus::Unreleased => TargetStatus::Open,
            ReleaseStatus::Released => TargetStatus::Fixed,
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match symbol_name(s) {
            "unreleased" => Ok(ReleaseStatus::Unreleased),
            "released" => Ok(ReleaseStatus::Released),
            _ => Err(Error::UnknownReleaseStatus(s.to_string())),
        }
    }
}

/// Bugs Everywhere status, as written into `<status>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Open,
    Fixed,
}

impl TargetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Open => "open",
            TargetStatus::Fixed => "fixed",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up the target status for a raw Ditz issue status.
///
/// # Errors
///
/// Returns [`Error::UnknownIssueStatus`] for anything outside the Ditz
/// issue vocabulary.
pub fn issue_status(raw: &str) -> Result<TargetStatus> {
    Ok(raw.parse::<IssueStatus>()?.target())
}

/// Look up the target status for a raw Ditz release status.
///
/// # Errors
///
/// Returns [`Error::UnknownReleaseStatus`] for anything outside the Ditz
/// release vocabulary.
pub fn release_status(raw: &str) -> Result<TargetStatus> {
    Ok(raw.parse::<ReleaseStatus>()?.target())
}

#[cfg(test)]
#[path = "vocabulary_tests.rs"]
mod tests;
