// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp reformatting.
//!
//! Ditz stores times as `2012-02-23T22:09:58Z` (or the YAML timestamp form
//! `2012-02-23 22:09:58.123456 Z`). Bugs Everywhere wants RFC 2822 style
//! `Thu, 23 Feb 2012 22:09:58 +0000`. The importer expects `+0000`, so the
//! wall-clock components are kept as written and any zone indicator is
//! dropped.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[Tt]|[ \t]+)(\d{1,2}):(\d{2}):(\d{2})(?:\.\d*)?(?:[ \t]*(?:Z|z|[-+]\d{1,2}(?::?\d{2})?))?$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Output pattern for Bugs Everywhere dates.
const TARGET_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Parse a Ditz timestamp into its wall-clock components.
///
/// Fractional seconds and the zone indicator are discarded.
pub fn parse(raw: &str) -> Result<NaiveDateTime> {
    let invalid = |reason: &str| Error::InvalidTimestamp {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let caps = TIMESTAMP_RE
        .captures(raw.trim())
        .ok_or_else(|| invalid("expected YYYY-MM-DDTHH:MM:SSZ"))?;

    let field = |i: usize| -> Result<u32> {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| invalid("malformed number"))
    };

    let year = i32::try_from(field(1)?).map_err(|_| invalid("year out of range"))?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)
        .ok_or_else(|| invalid("no such date"))?;
    date.and_hms_opt(field(4)?, field(5)?, field(6)?)
        .ok_or_else(|| invalid("no such time"))
}

/// Convert a Ditz timestamp into the Bugs Everywhere date format.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if `raw` is not a Ditz timestamp or
/// names an impossible date.
pub fn reformat(raw: &str) -> Result<String> {
    Ok(parse(raw)?.format(TARGET_FORMAT).to_string())
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
