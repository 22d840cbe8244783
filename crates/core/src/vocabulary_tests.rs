// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    unstarted = { ":unstarted", TargetStatus::Open },
    paused = { ":paused", TargetStatus::Open },
    in_progress = { ":in_progress", TargetStatus::Open },
    closed = { ":closed", TargetStatus::Fixed },
    bare_unstarted = { "unstarted", TargetStatus::Open },
    bare_closed = { "closed", TargetStatus::Fixed },
)]
fn test_issue_status_table(raw: &str, expected: TargetStatus) {
    assert_eq!(issue_status(raw).unwrap(), expected);
}

#[parameterized(
    unreleased = { ":unreleased", TargetStatus::Open },
    released = { ":released", TargetStatus::Fixed },
    bare_released = { "released", TargetStatus::Fixed },
)]
fn test_release_status_table(raw: &str, expected: TargetStatus) {
    assert_eq!(release_status(raw).unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    colon_only = { ":" },
    open = { ":open" },
    fixed = { "fixed" },
    upper = { ":CLOSED" },
    released = { ":released" },
    spaced = { " :closed" },
)]
fn test_issue_status_unknown(raw: &str) {
    let err = issue_status(raw).unwrap_err();
    assert!(matches!(err, Error::UnknownIssueStatus(ref s) if s == raw));
}

#[parameterized(
    empty = { "" },
    closed = { ":closed" },
    shipped = { ":shipped" },
)]
fn test_release_status_unknown(raw: &str) {
    let err = release_status(raw).unwrap_err();
    assert!(matches!(err, Error::UnknownReleaseStatus(ref s) if s == raw));
}

#[parameterized(
    unstarted = { IssueStatus::Unstarted, "unstarted" },
    paused = { IssueStatus::Paused, "paused" },
    in_progress = { IssueStatus::InProgress, "in_progress" },
    closed = { IssueStatus::Closed, "closed" },
)]
fn test_issue_status_round_trips_through_name(status: IssueStatus, name: &str) {
    assert_eq!(status.to_string(), name);
    assert_eq!(name.parse::<IssueStatus>().unwrap(), status);
}

#[test]
fn test_target_status_as_str() {
    assert_eq!(TargetStatus::Open.as_str(), "open");
    assert_eq!(TargetStatus::Fixed.to_string(), "fixed");
}
