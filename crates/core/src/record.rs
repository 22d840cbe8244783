// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ditz record model.
//!
//! Every Ditz file holds one YAML document tagged with its record kind,
//! e.g. `--- !ditz.rubyforge.org,2008-03-06/issue`. The document is parsed
//! into a generic [`serde_yaml::Value`] tree and then coerced into one of the
//! closed set of [`Record`] variants, checking required fields up front.
//!
//! The Ditz writer emits every key of a record, so a missing required key is
//! a format error. A key whose value is null is treated as absent.

use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};
use std::fmt;

use crate::error::{Error, Result};
use crate::repair::repair;
use crate::vocabulary::{IssueStatus, ReleaseStatus};

/// Tag namespace shared by all Ditz record kinds.
pub const TAG_PREFIX: &str = "ditz.rubyforge.org,2008-03-06/";

/// The kind of a Ditz record, taken from its YAML tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Issue,
    Project,
    Release,
    Component,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Issue => "issue",
            RecordKind::Project => "project",
            RecordKind::Release => "release",
            RecordKind::Component => "component",
        }
    }

    /// Resolve a YAML tag (with or without the leading `!`).
    pub fn from_tag(tag: &str) -> Result<Self> {
        let name = tag.strip_prefix('!').unwrap_or(tag);
        match name.strip_prefix(TAG_PREFIX) {
            Some("issue") => Ok(RecordKind::Issue),
            Some("project") => Ok(RecordKind::Project),
            Some("release") => Ok(RecordKind::Release),
            Some("component") => Ok(RecordKind::Component),
            _ => Err(Error::UnknownRecordTag(tag.to_string())),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parsed Ditz record.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Issue(Issue),
    Project(Project),
    Release(Release),
    Component(Component),
}

impl Record {
    /// Repair raw Ditz text and parse it.
    pub fn from_ditz(raw: &str) -> Result<Self> {
        Self::parse(&repair(raw)?)
    }

    /// Parse conformant YAML text holding one tagged record.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(&value)
    }

    /// Build a record from a parsed YAML tree.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Tagged(tagged) = value else {
            return Err(Error::UnknownRecordTag("(untagged)".to_string()));
        };
        let TaggedValue { tag, value } = tagged.as_ref();

        let record = match RecordKind::from_tag(&tag.to_string())? {
            RecordKind::Issue => Record::Issue(Issue::from_fields(&Fields::new(
                RecordKind::Issue,
                value,
            )?)?),
            RecordKind::Project => Record::Project(Project::from_fields(&Fields::new(
                RecordKind::Project,
                value,
            )?)?),
            RecordKind::Release => Record::Release(Release::from_fields(&Fields::new(
                RecordKind::Release,
                value,
            )?)?),
            RecordKind::Component => Record::Component(Component::from_fields(&Fields::new(
                RecordKind::Component,
                value,
            )?)?),
        };
        Ok(record)
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Issue(_) => RecordKind::Issue,
            Record::Project(_) => RecordKind::Project,
            Record::Release(_) => RecordKind::Release,
            Record::Component(_) => RecordKind::Component,
        }
    }

    /// Unwrap an issue record, failing on any other kind.
    pub fn into_issue(self) -> Result<Issue> {
        match self {
            Record::Issue(issue) => Ok(issue),
            other => Err(unexpected(RecordKind::Issue, &other)),
        }
    }

    /// Unwrap a project record, failing on any other kind.
    pub fn into_project(self) -> Result<Project> {
        match self {
            Record::Project(project) => Ok(project),
            other => Err(unexpected(RecordKind::Project, &other)),
        }
    }
}

fn unexpected(expected: RecordKind, found: &Record) -> Error {
    Error::UnexpectedRecord {
        expected: expected.as_str(),
        found: found.kind().to_string(),
    }
}

/// A timestamped entry in an issue or release log.
///
/// Stored by Ditz as `[time, who, action, comment]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub time: String,
    pub who: Option<String>,
    pub action: String,
    pub comment: Option<String>,
}

/// A tracked work item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Issue {
    /// Ditz identifier (SHA-1 hex). Not usable as a Bugs Everywhere id.
    pub id: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    /// Ditz type symbol without the colon (`bugfix`, `feature`, `task`).
    pub issue_type: Option<String>,
    pub component: Option<String>,
    /// Name of the release this issue is filed against.
    pub release: Option<String>,
    pub reporter: Option<String>,
    pub status: Option<IssueStatus>,
    /// Ditz disposition symbol without the colon (`fixed`, `wontfix`, ...).
    pub disposition: Option<String>,
    pub creation_time: Option<String>,
    pub references: Vec<String>,
    pub log_events: Vec<LogEvent>,
}

impl Issue {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        let status = fields
            .required("status")?
            .map(|s| s.parse::<IssueStatus>())
            .transpose()?;

        Ok(Issue {
            id: fields.required("id")?,
            title: fields.required("title")?,
            desc: fields.optional("desc")?,
            issue_type: fields.symbol("type")?,
            component: fields.optional("component")?,
            release: fields.optional("release")?,
            reporter: fields.required("reporter")?,
            status,
            disposition: fields.symbol("disposition")?,
            creation_time: fields.required("creation_time")?,
            references: fields.strings("references")?,
            log_events: fields.log_events("log_events")?,
        })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id = {}\ntitle: {}\ncreated: {}",
            self.id.as_deref().unwrap_or("~"),
            self.title.as_deref().unwrap_or("~"),
            self.creation_time.as_deref().unwrap_or("~"),
        )
    }
}

/// The project record (`project.yaml`), declaring components and releases.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Project {
    pub name: Option<String>,
    pub version: Option<String>,
    pub components: Vec<Component>,
    pub releases: Vec<Release>,
}

impl Project {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        let components = fields
            .nested("components", RecordKind::Component)?
            .into_iter()
            .map(|v| Component::from_fields(&Fields::new(RecordKind::Component, v)?))
            .collect::<Result<Vec<_>>>()?;
        let releases = fields
            .nested("releases", RecordKind::Release)?
            .into_iter()
            .map(|v| Release::from_fields(&Fields::new(RecordKind::Release, v)?))
            .collect::<Result<Vec<_>>>()?;

        Ok(Project {
            name: fields.optional("name")?,
            version: fields.optional("version")?,
            components,
            releases,
        })
    }
}

/// A named milestone. Becomes a "target" bug in the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub name: String,
    pub status: ReleaseStatus,
    pub release_time: Option<String>,
    pub log_events: Vec<LogEvent>,
}

impl Release {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Release {
            name: fields.present("name")?,
            status: fields.present("status")?.parse()?,
            release_time: fields.optional("release_time")?,
            log_events: fields.log_events("log_events")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
}

impl Component {
    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Component {
            name: fields.present("name")?,
        })
    }
}

/// Field accessor over one record's mapping.
struct Fields<'a> {
    record: &'static str,
    map: &'a Mapping,
}

impl<'a> Fields<'a> {
    fn new(kind: RecordKind, value: &'a Value) -> Result<Self> {
        match value {
            Value::Mapping(map) => Ok(Fields {
                record: kind.as_str(),
                map,
            }),
            _ => Err(Error::InvalidField {
                record: kind.as_str(),
                field: "(root)",
                reason: "expected a mapping".to_string(),
            }),
        }
    }

    fn invalid(&self, field: &'static str, reason: &str) -> Error {
        Error::InvalidField {
            record: self.record,
            field,
            reason: reason.to_string(),
        }
    }

    /// Key must exist; a null value reads as `None`.
    fn required(&self, field: &'static str) -> Result<Option<String>> {
        let value = self.map.get(field).ok_or(Error::MissingField {
            record: self.record,
            field,
        })?;
        self.scalar(field, value)
    }

    /// Key must exist with a non-null value.
    fn present(&self, field: &'static str) -> Result<String> {
        self.required(field)?
            .ok_or_else(|| self.invalid(field, "must not be null"))
    }

    fn optional(&self, field: &'static str) -> Result<Option<String>> {
        match self.map.get(field) {
            Some(value) => self.scalar(field, value),
            None => Ok(None),
        }
    }

    /// Optional Ruby symbol, returned without its leading colon.
    fn symbol(&self, field: &'static str) -> Result<Option<String>> {
        Ok(self
            .optional(field)?
            .map(|s| s.strip_prefix(':').map(str::to_string).unwrap_or(s)))
    }

    fn list(&self, field: &'static str) -> Result<&'a [Value]> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(&[][..]),
            Some(Value::Sequence(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid(field, "expected a sequence")),
        }
    }

    fn strings(&self, field: &'static str) -> Result<Vec<String>> {
        self.list(field)?
            .iter()
            .filter_map(|v| self.scalar(field, v).transpose())
            .collect()
    }

    /// A list of tagged records of one kind, returned untagged.
    fn nested(&self, field: &'static str, kind: RecordKind) -> Result<Vec<&'a Value>> {
        self.list(field)?
            .iter()
            .map(|item| match item {
                Value::Tagged(tagged) => {
                    let found = RecordKind::from_tag(&tagged.tag.to_string())?;
                    if found == kind {
                        Ok(&tagged.value)
                    } else {
                        Err(Error::UnexpectedRecord {
                            expected: kind.as_str(),
                            found: found.to_string(),
                        })
                    }
                }
                _ => Err(self.invalid(field, "expected tagged records")),
            })
            .collect()
    }

    fn log_events(&self, field: &'static str) -> Result<Vec<LogEvent>> {
        self.list(field)?
            .iter()
            .map(|item| self.log_event(field, item))
            .collect()
    }

    fn log_event(&self, field: &'static str, item: &Value) -> Result<LogEvent> {
        let parts = match item {
            Value::Sequence(parts) if (3..=4).contains(&parts.len()) => parts,
            _ => {
                return Err(self.invalid(field, "expected [time, who, action, comment] entries"))
            }
        };
        let at = |i: usize| match parts.get(i) {
            Some(v) => self.scalar(field, v),
            None => Ok(None),
        };

        Ok(LogEvent {
            time: at(0)?.ok_or_else(|| self.invalid(field, "log event without a time"))?,
            who: at(1)?,
            action: at(2)?
                .map(|a| a.strip_prefix(':').map(str::to_string).unwrap_or(a))
                .unwrap_or_default(),
            comment: at(3)?,
        })
    }

    fn scalar(&self, field: &'static str, value: &Value) -> Result<Option<String>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            _ => Err(self.invalid(field, "expected a scalar value")),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
