// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion of Ditz records into Bugs Everywhere XML.
//!
//! Issues become `<bug>` elements. Releases become `<bug>` elements marked
//! with severity `target`, and the two are tied together with
//! `BLOCKS:<release-uuid>` / `BLOCKED-BY:<issue-uuid>` extra strings.
//!
//! Release bugs can only be written once every issue has been linked, so
//! [`Converter::finish`] consumes the converter: nothing can be added after
//! the releases are emitted.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;
use crate::ids::{IdSource, RandomIds};
use crate::record::{Issue, Project};
use crate::registry::{Registry, ReleaseEntry};
use crate::timestamp::reformat;
use crate::xml::Element;

/// Root element of a Bugs Everywhere import file.
pub const ROOT: &str = "be-xml";

/// Body used for comments whose text is blank. The importer rejects empty
/// bodies.
pub const NO_CONTENT: &str = "(no content)";

/// Content type of every synthesized comment.
pub const CONTENT_TYPE: &str = "text/plain";

/// Severity marking a bug as a release target.
pub const TARGET_SEVERITY: &str = "target";

/// Prefix of the extra string an issue uses to point at its release.
pub const BLOCKS: &str = "BLOCKS:";

/// Prefix of the extra strings a release uses to point back at its issues.
pub const BLOCKED_BY: &str = "BLOCKED-BY:";

/// Build a `<comment>` element.
///
/// A body that is blank after trimming is replaced by [`NO_CONTENT`].
/// Absent author or date leave out the matching child.
pub fn comment(body: &str, author: Option<&str>, date: Option<&str>) -> Element {
    let mut out = Element::new("comment");
    if let Some(author) = author {
        out.push_leaf("author", author);
    }
    if let Some(date) = date {
        out.push_leaf("date", date);
    }
    out.push_leaf("content-type", CONTENT_TYPE);
    let body = if body.trim().is_empty() { NO_CONTENT } else { body };
    out.push_leaf("body", body);
    out
}

/// Convert one issue into a `<bug>` element.
///
/// If the issue names a release, the release is linked in `registry`
/// (created as open if undeclared) and the bug gets a `BLOCKS` marker. The
/// link is made only after every fallible step has succeeded.
pub fn issue_bug(issue: &Issue, registry: &mut Registry, ids: &mut impl IdSource) -> Result<Element> {
    let id = ids.next_id();
    issue_bug_with_id(issue, id, registry, ids)
}

fn issue_bug_with_id(
    issue: &Issue,
    id: Uuid,
    registry: &mut Registry,
    ids: &mut impl IdSource,
) -> Result<Element> {
    let created = issue.creation_time.as_deref().map(reformat).transpose()?;
    let reporter = issue.reporter.as_deref();

    let mut bug = Element::new("bug");
    if let Some(created) = &created {
        bug.push_leaf("created", created);
    }
    if let Some(title) = &issue.title {
        bug.push_leaf("summary", title);
    }
    if let Some(status) = issue.status {
        bug.push_leaf("status", status.target().as_str());
    }
    if let Some(reporter) = reporter {
        bug.push_leaf("reporter", reporter);
        bug.push_leaf("creator", reporter);
    }
    bug.push_leaf("uuid", id.to_string());

    if let Some(desc) = &issue.desc {
        bug.push(comment(desc, reporter, created.as_deref()));
    }
    for event in &issue.log_events {
        let Some(text) = event.comment.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };
        let date = reformat(&event.time)?;
        bug.push(comment(text, event.who.as_deref(), Some(&date)));
    }

    if let Some(release) = &issue.release {
        let release_id = registry.link(release, id, ids);
        bug.push_leaf("extra-string", format!("{}{}", BLOCKS, release_id));
    }

    Ok(bug)
}

/// Convert one registry entry into a release target `<bug>`.
pub fn release_bug(name: &str, entry: &ReleaseEntry) -> Element {
    let mut bug = Element::new("bug");
    bug.push_leaf("uuid", entry.id.to_string());
    bug.push_leaf("summary", name);
    bug.push_leaf("severity", TARGET_SEVERITY);
    bug.push_leaf("status", entry.status.as_str());
    for issue in &entry.blocked_by {
        bug.push_leaf("extra-string", format!("{}{}", BLOCKED_BY, issue));
    }
    bug
}

/// Accumulates issue bugs and release links for one conversion run.
///
/// Declare the project (if any) first, then add issues in order, then call
/// [`finish`](Converter::finish).
pub struct Converter<I: IdSource = RandomIds> {
    ids: I,
    registry: Registry,
    bugs: Vec<Element>,
}

impl Converter<RandomIds> {
    pub fn new() -> Self {
        Self::with_ids(RandomIds)
    }
}

impl Default for Converter<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Converter<I> {
    pub fn with_ids(ids: I) -> Self {
        Converter {
            ids,
            registry: Registry::new(),
            bugs: Vec::new(),
        }
    }

    /// Seed the registry with the project's declared releases.
    pub fn declare_project(&mut self, project: &Project) -> Result<()> {
        for release in &project.releases {
            self.registry.declare(release, &mut self.ids)?;
        }
        debug!(
            "project {} declares {} release(s), {} component(s)",
            project.name.as_deref().unwrap_or("(unnamed)"),
            project.releases.len(),
            project.components.len()
        );
        Ok(())
    }

    /// Convert an issue and queue its bug. Returns the bug's identifier.
    pub fn add_issue(&mut self, issue: &Issue) -> Result<Uuid> {
        let id = self.ids.next_id();
        let bug = issue_bug_with_id(issue, id, &mut self.registry, &mut self.ids)?;
        debug!("converted issue\n{}", issue);
        self.bugs.push(bug);
        Ok(id)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn issue_count(&self) -> usize {
        self.bugs.len()
    }

    /// Emit the document: `<version>`, issue bugs in the order added, then
    /// one target bug per release in registry order.
    pub fn finish(self) -> Element {
        info!(
            "converted {} issue(s) and {} release(s)",
            self.bugs.len(),
            self.registry.len()
        );

        let mut root = Element::new(ROOT);
        root.push(Element::new("version"));
        for bug in self.bugs {
            root.push(bug);
        }
        for (name, entry) in self.registry {
            root.push(release_bug(&name, &entry));
        }
        root
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
