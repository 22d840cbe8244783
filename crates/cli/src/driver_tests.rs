// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::discover::discover;
use d2b_core::xml::render;
use d2b_core::SequentialIds;
use std::path::PathBuf;
use tempfile::TempDir;

const PROJECT: &str = r#"--- !ditz.rubyforge.org,2008-03-06/project
name: demo
version: "0.5"
components:
- !ditz.rubyforge.org,2008-03-06/component
  name: demo
releases:
- !ditz.rubyforge.org,2008-03-06/release
  name: "0.4"
  status: :released
  release_time: 2008-04-02 16:37:55.419522 Z
  log_events: []
- !ditz.rubyforge.org,2008-03-06/release
  name: "0.5"
  status: :unreleased
  release_time:
  log_events: []
"#;

const ISSUE_A: &str = r#"--- !ditz.rubyforge.org,2008-03-06/issue
title: Crash on empty input
desc: ""
type: :bugfix
component: demo
release: "0.5"
reporter: Jo <jo@example.com>
status: :in_progress
disposition:
creation_time: 2012-02-23 22:09:58.749813 Z
references: []

id: 4f2f5a0ba0b97bd24b6fa2e3ffa0f6f6b1d6ea2d
log_events:
- - 2012-02-23 22:09:59.877432 Z
  - Jo <jo@example.com>
  - created
  - ""
"#;

const ISSUE_B: &str = r#"--- !ditz.rubyforge.org,2008-03-06/issue
title: `ls` output & sorting
desc: "Reported by Mat\xC4\x9Bj"
type: :feature
component: demo
release: "0.6"
reporter: Al <al@example.com>
status: :closed
disposition: :fixed
creation_time: 2012-03-01 10:00:00 Z
references: []

id: 9c1f0b5e2b7d3a4e8f6a1c2b3d4e5f60718293a4
log_events:
- - 2012-03-02 11:30:00 Z
  - Jo <jo@example.com>
  - commented
  - Fixed in master.
"#;

fn store(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, text) in files {
        fs::write(temp.path().join(name), text).unwrap();
    }
    temp
}

#[test]
fn test_convert_full_store() {
    let temp = store(&[
        ("project.yaml", PROJECT),
        ("issue-b.yaml", ISSUE_B),
        ("issue-a.yaml", ISSUE_A),
    ]);
    let files = discover(temp.path()).unwrap();

    let doc = render(&convert(&files, SequentialIds::new()).unwrap());

    let expected = "\
<?xml version=\"1.0\" encoding=\"utf-8\"?>
<be-xml>
  <version />
  <bug>
    <created>Thu, 23 Feb 2012 22:09:58 +0000</created>
    <summary>Crash on empty input</summary>
    <status>open</status>
    <reporter>Jo &lt;jo@example.com&gt;</reporter>
    <creator>Jo &lt;jo@example.com&gt;</creator>
    <uuid>00000000-0000-0000-0000-000000000003</uuid>
    <comment>
      <author>Jo &lt;jo@example.com&gt;</author>
      <date>Thu, 23 Feb 2012 22:09:58 +0000</date>
      <content-type>text/plain</content-type>
      <body>(no content)</body>
    </comment>
    <extra-string>BLOCKS:00000000-0000-0000-0000-000000000002</extra-string>
  </bug>
  <bug>
    <created>Thu, 01 Mar 2012 10:00:00 +0000</created>
    <summary>`ls` output &amp; sorting</summary>
    <status>fixed</status>
    <reporter>Al &lt;al@example.com&gt;</reporter>
    <creator>Al &lt;al@example.com&gt;</creator>
    <uuid>00000000-0000-0000-0000-000000000004</uuid>
    <comment>
      <author>Al &lt;al@example.com&gt;</author>
      <date>Thu, 01 Mar 2012 10:00:00 +0000</date>
      <content-type>text/plain</content-type>
      <body>Reported by Matěj</body>
    </comment>
    <comment>
      <author>Jo &lt;jo@example.com&gt;</author>
      <date>Fri, 02 Mar 2012 11:30:00 +0000</date>
      <content-type>text/plain</content-type>
      <body>Fixed in master.</body>
    </comment>
    <extra-string>BLOCKS:00000000-0000-0000-0000-000000000005</extra-string>
  </bug>
  <bug>
    <uuid>00000000-0000-0000-0000-000000000001</uuid>
    <summary>0.4</summary>
    <severity>target</severity>
    <status>fixed</status>
  </bug>
  <bug>
    <uuid>00000000-0000-0000-0000-000000000002</uuid>
    <summary>0.5</summary>
    <severity>target</severity>
    <status>open</status>
    <extra-string>BLOCKED-BY:00000000-0000-0000-0000-000000000003</extra-string>
  </bug>
  <bug>
    <uuid>00000000-0000-0000-0000-000000000005</uuid>
    <summary>0.6</summary>
    <severity>target</severity>
    <status>open</status>
    <extra-string>BLOCKED-BY:00000000-0000-0000-0000-000000000004</extra-string>
  </bug>
</be-xml>
";
    similar_asserts::assert_eq!(doc, expected);
}

#[test]
fn test_convert_without_project() {
    let temp = store(&[("issue-a.yaml", ISSUE_A)]);
    let files = discover(temp.path()).unwrap();

    let root = convert(&files, SequentialIds::new()).unwrap();

    let summaries: Vec<&str> = root
        .find_all("bug")
        .filter_map(|b| b.child_text("summary"))
        .collect();
    assert_eq!(summaries, vec!["Crash on empty input", "0.5"]);
}

#[test]
fn test_convert_empty_store() {
    let temp = store(&[]);
    let files = discover(temp.path()).unwrap();

    let root = convert(&files, SequentialIds::new()).unwrap();

    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].name(), "version");
}

#[test]
fn test_unknown_status_names_file() {
    let bad = ISSUE_A.replace(":in_progress", ":wontfix");
    let temp = store(&[("issue-a.yaml", &bad)]);
    let files = discover(temp.path()).unwrap();

    let err = convert(&files, SequentialIds::new()).unwrap_err();

    match err {
        Error::Record { path, source } => {
            assert!(path.ends_with("issue-a.yaml"));
            assert!(matches!(source, d2b_core::Error::UnknownIssueStatus(ref s) if s == ":wontfix"));
        }
        other => unreachable!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_byte_escape_is_fatal() {
    let bad = ISSUE_A.replace(r#"desc: """#, r#"desc: "bad \xC4 byte""#);
    let temp = store(&[("issue-a.yaml", &bad)]);
    let files = discover(temp.path()).unwrap();

    let err = convert(&files, SequentialIds::new()).unwrap_err();

    assert!(matches!(
        err,
        Error::Record {
            source: d2b_core::Error::InvalidByteEscape { .. },
            ..
        }
    ));
}

#[test]
fn test_project_in_issue_slot_is_rejected() {
    let temp = store(&[("issue-a.yaml", PROJECT)]);
    let files = discover(temp.path()).unwrap();

    let err = convert(&files, SequentialIds::new()).unwrap_err();

    assert!(matches!(
        err,
        Error::Record {
            source: d2b_core::Error::UnexpectedRecord { .. },
            ..
        }
    ));
}

#[test]
fn test_read_record_missing_file() {
    let err = read_record(&PathBuf::from("/nonexistent/issue-x.yaml")).unwrap_err();
    assert!(matches!(err, Error::ReadFile { .. }));
}
