// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Raw XCTest console output decoding
//!
//! This module turns the plain-text log printed by `swift test` or
//! `xcodebuild test` into a [`TestSuite`] tree. The log is processed in a
//! single forward pass:
//!
//! - `Test Suite '...' started at ...` opens a suite on a stack
//! - `Test Suite '...' passed|failed at ...` closes the innermost suite and
//!   attaches it to its parent
//! - `Test Case '...' started.` begins buffering diagnostic output
//! - `Test Case '...' passed|failed (S seconds).` appends a case to the
//!   innermost open suite
//!
//! Lines that lack a required field are skipped. Nothing here returns an
//! error for malformed input; a log with no decodable suite yields `None`.
//!
//! # Example
//!
//! ```
//! use testify_decoder::decoder::RawTestResultDecoder;
//!
//! let log = "\
//! Test Suite 'All tests' started at 2023-02-12 10:00:00.000
//! Test Case '-[AppTests.LoginTests testLogin]' started.
//! Test Case '-[AppTests.LoginTests testLogin]' passed (0.004 seconds).
//! Test Suite 'All tests' passed at 2023-02-12 10:00:00.010.
//! \t Executed 1 test, with 0 failures (0 unexpected) in 0.004 (0.010) seconds
//! ";
//!
//! let suite = RawTestResultDecoder::new().decode(log).unwrap();
//! assert_eq!(suite.name, "All tests");
//! assert_eq!(suite.cases[0].test_name, "testLogin");
//! ```

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::extract::{matched_date, matched_seconds, matched_test_name, matched_unexpected};
use crate::result::{FailureInfo, Outcome, TestCase, TestSuite};

/// Timestamp layout printed by XCTest, e.g. `2023-02-12 10:15:42.123`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const SUITE_MARKER: &str = "Test Suite";
const CASE_MARKER: &str = "Test Case";
const STARTED: &str = "started";
const EXECUTED: &str = "Executed";

// ============================================================================
// Decoder
// ============================================================================

/// Decoder for raw XCTest console output
///
/// Holds only the timestamp format, so one instance can be shared freely
/// between threads and reused for any number of logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTestResultDecoder {
    date_format: String,
}

impl RawTestResultDecoder {
    /// Create a decoder using [`DEFAULT_DATE_FORMAT`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Override the chrono format used to convert matched timestamps
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// The chrono format used to convert matched timestamps
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Decode a complete log into its root suite.
    ///
    /// Returns `None` when no suite could be decoded. Suites that were opened
    /// but never closed are discarded along with everything nested in them.
    #[must_use]
    pub fn decode(&self, input: &str) -> Option<TestSuite> {
        let lines: Vec<&str> = input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect();

        let mut state = DecodeState::new(&self.date_format);

        for (index, line) in lines.iter().copied().enumerate() {
            if line.contains(SUITE_MARKER) {
                if line.contains(STARTED) {
                    state.start_suite(line);
                } else {
                    state.end_suite(line, lines.get(index + 1).copied());
                }
                continue;
            }
            if line.contains(CASE_MARKER) {
                if line.contains(STARTED) {
                    state.start_case(line);
                } else {
                    state.end_case(line);
                }
                continue;
            }
            if state.gathering {
                state.output.push_str(line);
            }
        }

        state.finish()
    }

    /// Decode a complete log, treating a missing root suite as an error
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::NoRootSuite` if no suite could be decoded.
    pub fn decode_root(&self, input: &str) -> Result<TestSuite, DecodeError> {
        self.decode(input).ok_or(DecodeError::NoRootSuite)
    }
}

impl Default for RawTestResultDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a log with the default decoder
#[must_use]
pub fn decode(input: &str) -> Option<TestSuite> {
    RawTestResultDecoder::new().decode(input)
}

// ============================================================================
// Per-call state machine
// ============================================================================

struct DecodeState<'a> {
    date_format: &'a str,
    /// Open suites, innermost last
    suites: Vec<TestSuite>,
    current_case_name: Option<String>,
    output: String,
    gathering: bool,
}

impl<'a> DecodeState<'a> {
    fn new(date_format: &'a str) -> Self {
        Self {
            date_format,
            suites: Vec::new(),
            current_case_name: None,
            output: String::new(),
            gathering: false,
        }
    }

    fn parse_date(&self, line: &str) -> Option<NaiveDateTime> {
        let matched = matched_date(line)?;
        NaiveDateTime::parse_from_str(matched, self.date_format).ok()
    }

    fn start_suite(&mut self, line: &str) {
        let Some(name) = matched_test_name(line) else {
            trace!(line, "Suite start without a name, skipping");
            return;
        };
        let Some(date) = self.parse_date(line) else {
            trace!(line, "Suite start without a timestamp, skipping");
            return;
        };
        self.suites.push(TestSuite::new(name, date));
    }

    fn end_suite(&mut self, line: &str, next_line: Option<&str>) {
        let Some(mut suite) = self.suites.pop() else {
            trace!(line, "Suite end with no open suite, skipping");
            return;
        };

        suite.outcome = Outcome::from_marker(line);
        if let Some(date) = self.parse_date(line) {
            suite.end_date = date;
        }
        if let Some(unexpected) = next_line
            .filter(|next| next.contains(EXECUTED))
            .and_then(matched_unexpected)
            .and_then(|count| count.parse::<usize>().ok())
        {
            suite.unexpected = unexpected;
        }

        debug!(
            suite = %suite.name,
            outcome = %suite.outcome,
            cases = suite.cases.len(),
            unexpected = suite.unexpected,
            "Suite finished"
        );

        match self.suites.pop() {
            Some(mut parent) => {
                parent.children.push(suite);
                self.suites.push(parent);
            }
            None => self.suites.push(suite),
        }
    }

    fn start_case(&mut self, line: &str) {
        self.output.clear();
        self.gathering = true;
        self.current_case_name = matched_test_name(line).map(str::to_string);
    }

    fn end_case(&mut self, line: &str) {
        self.gathering = false;
        let Some(mut suite) = self.suites.pop() else {
            trace!(line, "Case end with no open suite, skipping");
            return;
        };

        let outcome = Outcome::from_marker(line);
        let failure_info = match outcome {
            Outcome::Failure => parse_failure_info(&self.output),
            Outcome::Success => None,
        };

        let name = self.current_case_name.take();
        match name.and_then(|name| build_case(&name, line, outcome, failure_info)) {
            Some(case) => suite.cases.push(case),
            None => trace!(line, "Case end without a usable name or duration, skipping"),
        }
        self.suites.push(suite);
    }

    fn finish(self) -> Option<TestSuite> {
        if self.suites.len() > 1 {
            debug!(
                open = self.suites.len() - 1,
                "Input ended with unclosed suites, discarding them"
            );
        }
        self.suites.into_iter().next()
    }
}

// ============================================================================
// Case helpers
// ============================================================================

/// Parse `path:line: f2: f3: ... :reason` diagnostic output
///
/// Empty fields are dropped before indexing, so `a::b` splits into two.
fn parse_failure_info(output: &str) -> Option<FailureInfo> {
    let fields: Vec<&str> = output.split(':').filter(|f| !f.is_empty()).collect();
    let file = fields.first()?;
    let line = fields.get(1)?.parse::<i64>().ok()?;
    let reason = fields
        .get(4..)
        .map(|rest| rest.join(":"))
        .unwrap_or_default();

    Some(FailureInfo {
        file: (*file).to_string(),
        line,
        reason: reason
            .trim_matches(|c: char| c == '-' || c.is_whitespace())
            .to_string(),
    })
}

/// Split `-[Module.Class testName]` into its three parts
fn split_case_name(name: &str) -> Option<(&str, &str, &str)> {
    // drop the two-character `-[` prefix and the closing `]`
    let start = name.char_indices().nth(2)?.0;
    let end = name.char_indices().last()?.0;
    let inner = name.get(start..end)?;

    let mut dotted = inner.split('.').filter(|s| !s.is_empty());
    let module = dotted.next()?;
    let qualified = dotted.next()?;

    let mut spaced = qualified.split(' ').filter(|s| !s.is_empty());
    let class = spaced.next()?;
    let test = spaced.next()?;

    Some((module, class, test))
}

fn build_case(
    name: &str,
    line: &str,
    outcome: Outcome,
    failure_info: Option<FailureInfo>,
) -> Option<TestCase> {
    let duration = matched_seconds(line)?.parse::<f64>().ok()?;
    let (module, class, test) = split_case_name(name)?;

    Some(TestCase {
        module_name: module.to_string(),
        class_name: class.to_string(),
        test_name: test.to_string(),
        duration,
        outcome,
        failure_info,
    })
}
