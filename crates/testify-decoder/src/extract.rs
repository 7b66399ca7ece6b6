// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Field extraction from single log lines
//!
//! Each extractor returns the first match as a borrowed slice of the line, or
//! `None` when the line does not carry that field. None of them fail.

use std::sync::LazyLock;

use regex::Regex;

static QUOTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'.+'").expect("valid regex"));

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}\s\d{2}:\d{2}:\d{2}\.\d{3}").expect("valid regex")
});

static SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

static UNEXPECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)").expect("valid regex"));

/// Quoted name with the quotes stripped.
///
/// The match is greedy: it spans from the first to the last `'` on the line.
#[must_use]
pub fn matched_test_name(line: &str) -> Option<&str> {
    let m = QUOTED_NAME.find(line)?;
    // both ends are the ASCII quote, so slicing by one byte is safe
    Some(&m.as_str()[1..m.len() - 1])
}

/// Timestamp in `YYYY-MM-DD HH:MM:SS.mmm` form
#[must_use]
pub fn matched_date(line: &str) -> Option<&str> {
    DATE.find(line).map(|m| m.as_str())
}

/// Fractional seconds such as `0.004`
#[must_use]
pub fn matched_seconds(line: &str) -> Option<&str> {
    SECONDS.find(line).map(|m| m.as_str())
}

/// Digits following the first `(` that is directly followed by a digit
#[must_use]
pub fn matched_unexpected(line: &str) -> Option<&str> {
    UNEXPECTED
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
