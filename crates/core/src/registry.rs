// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release relationship registry.
//!
//! Tracks, per release name, the identifier of its target bug, its
//! translated status, and the issues filed against it. Entries come from
//! the project record up front or are created on first reference by an
//! issue; both paths produce the same [`ReleaseEntry`].

use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::ids::IdSource;
use crate::record::Release;
use crate::vocabulary::TargetStatus;

/// Status given to releases that were never declared.
///
/// Ditz has no record to read a status from in that case.
pub const IMPLICIT_RELEASE_STATUS: TargetStatus = TargetStatus::Open;

/// Relationship bookkeeping for one release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseEntry {
    /// Identifier of the release's target bug.
    pub id: Uuid,
    pub status: TargetStatus,
    /// Issues filed against this release, in the order they were linked.
    pub blocked_by: Vec<Uuid>,
}

/// Release entries keyed by name, in insertion order.
#[derive(Debug, Default)]
pub struct Registry {
    entries: IndexMap<String, ReleaseEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry for a release declared in the project record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRelease`] if the name is already present.
    pub fn declare(&mut self, release: &Release, ids: &mut impl IdSource) -> Result<&ReleaseEntry> {
        if self.entries.contains_key(&release.name) {
            return Err(Error::DuplicateRelease(release.name.clone()));
        }
        let entry = self
            .entries
            .entry(release.name.clone())
            .or_insert(ReleaseEntry {
                id: ids.next_id(),
                status: release.status.target(),
                blocked_by: Vec::new(),
            });
        Ok(entry)
    }

    /// Record that `issue` is filed against the release called `name`.
    ///
    /// Creates the entry with [`IMPLICIT_RELEASE_STATUS`] if the release
    /// was never declared. Returns the release's identifier, which the
    /// issue must reference in turn.
    pub fn link(&mut self, name: &str, issue: Uuid, ids: &mut impl IdSource) -> Uuid {
        let entry = self.entries.entry(name.to_string()).or_insert_with(|| {
            debug!("release '{}' not declared, creating it", name);
            ReleaseEntry {
                id: ids.next_id(),
                status: IMPLICIT_RELEASE_STATUS,
                blocked_by: Vec::new(),
            }
        });
        entry.blocked_by.push(issue);
        entry.id
    }

    pub fn get(&self, name: &str) -> Option<&ReleaseEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReleaseEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

impl IntoIterator for Registry {
    type Item = (String, ReleaseEntry);
    type IntoIter = indexmap::map::IntoIter<String, ReleaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
