// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! d2b-core: conversion engine for ditz2be
//!
//! Turns Ditz issue-tracker records (a non-conformant YAML dialect) into the
//! Bugs Everywhere XML import format. File discovery and process plumbing
//! live in the `ditz2be` CLI crate; everything here works on in-memory text.
//!
//! The pipeline for one record is [`repair`] → [`Record::parse`] →
//! [`Converter`]. Issues are fed to the converter one at a time, and
//! [`Converter::finish`] emits the release bugs once every issue has been
//! seen.

pub mod convert;
pub mod error;
pub mod ids;
pub mod record;
pub mod registry;
pub mod repair;
pub mod timestamp;
pub mod vocabulary;
pub mod xml;

pub use convert::{Converter, NO_CONTENT};
pub use error::{Error, Result};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use record::{Component, Issue, LogEvent, Project, Record, RecordKind, Release};
pub use registry::{Registry, ReleaseEntry};
pub use repair::repair;
pub use timestamp::reformat;
pub use vocabulary::{IssueStatus, ReleaseStatus, TargetStatus};
pub use xml::Element;
