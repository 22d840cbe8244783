// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const PROJECT: &str = r#"--- !ditz.rubyforge.org,2008-03-06/project
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
"#;

/// Issue record with `{title}`, `{status}`, and `{release}` placeholders.
pub const ISSUE_TEMPLATE: &str = r#"--- !ditz.rubyforge.org,2008-03-06/issue
title: {title}
desc: Something is wrong.
type: :bugfix
component: demo
release: {release}
reporter: Jo <jo@example.com>
status: {status}
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

pub fn ditz2be() -> Command {
    let mut cmd = cargo_bin_cmd!("ditz2be");
    cmd.env_remove("DITZ_DIR").env_remove("RUST_LOG");
    cmd
}

pub fn issue(title: &str, status: &str, release: &str) -> String {
    ISSUE_TEMPLATE
        .replace("{title}", title)
        .replace("{status}", status)
        .replace("{release}", release)
}

/// Write `files` into `dir`, creating it if needed.
pub fn write_store(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, text) in files {
        fs::write(dir.join(name), text).unwrap();
    }
}

/// A temp directory holding a small store at `<temp>/.ditz`.
pub fn sample_store() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_store(
        &temp.path().join(".ditz"),
        &[
            ("project.yaml", PROJECT),
            ("issue-1.yaml", &issue("First problem", ":unstarted", "\"0.4\"")),
            ("issue-2.yaml", &issue("`ls` is slow", ":closed", "\"0.6\"")),
        ],
    );
    temp
}
