// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types
//!
//! A decoded log is a tree of [`TestSuite`] values. Each suite owns its child
//! suites and its [`TestCase`] leaves, both in the order they finished.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Pass/fail classification of a suite or case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Everything passed
    Success,
    /// At least one failure was reported
    Failure,
}

impl Outcome {
    /// Classify a terminal marker line by its `passed` keyword
    #[must_use]
    pub fn from_marker(line: &str) -> Self {
        if line.contains("passed") {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Check if this is a success
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure => f.write_str("failure"),
        }
    }
}

/// Location and message of an assertion failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureInfo {
    /// Source file reported by the failing assertion
    pub file: String,
    /// Line number within `file`
    pub line: i64,
    /// Assertion message
    pub reason: String,
}

/// A single executed test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Module (test target) name
    pub module_name: String,
    /// Test class name
    pub class_name: String,
    /// Test method name
    pub test_name: String,
    /// Duration in seconds
    pub duration: f64,
    /// Test outcome
    pub outcome: Outcome,
    /// Failure details, only for failing cases with a parsable diagnostic
    pub failure_info: Option<FailureInfo>,
}

impl TestCase {
    /// Check if the case passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome.is_success()
    }

    /// Check if the case failed
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.passed()
    }

    /// Fully qualified name, e.g. `MyModule.MyClassTests/testFoo`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}/{}", self.module_name, self.class_name, self.test_name)
    }

    /// Human-readable duration: milliseconds below one second, else seconds
    #[must_use]
    pub fn duration_display(&self) -> String {
        if self.duration < 1.0 {
            format!("{}ms", (self.duration * 1000.0).round() as u64)
        } else {
            format!("{:.2}s", self.duration)
        }
    }
}

/// A named group of test cases and nested suites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Suite name as printed between the quotes of its marker line
    pub name: String,
    /// Timestamp of the `started` marker
    pub start_date: NaiveDateTime,
    /// Timestamp of the terminal marker, `start_date` if none was parsed
    pub end_date: NaiveDateTime,
    /// Unexpected failure count from the `Executed ...` summary line
    pub unexpected: usize,
    /// Suite outcome
    pub outcome: Outcome,
    /// Nested suites in the order they finished
    pub children: Vec<TestSuite>,
    /// Cases in the order they finished
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Create an open suite.
    ///
    /// The outcome starts as [`Outcome::Failure`] and is only upgraded once a
    /// `passed` terminal marker is seen.
    #[must_use]
    pub fn new(name: impl Into<String>, start_date: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date: start_date,
            unexpected: 0,
            outcome: Outcome::Failure,
            children: Vec::new(),
            cases: Vec::new(),
        }
    }

    /// Wall-clock time between the start and end markers
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end_date - self.start_date
    }

    /// All cases in this subtree, own cases first, then each child in order
    #[must_use]
    pub fn all_cases(&self) -> Vec<&TestCase> {
        let mut cases: Vec<&TestCase> = self.cases.iter().collect();
        for child in &self.children {
            cases.extend(child.all_cases());
        }
        cases
    }

    /// Failing cases in this subtree
    #[must_use]
    pub fn failing_cases(&self) -> Vec<&TestCase> {
        self.all_cases().into_iter().filter(|c| c.failed()).collect()
    }

    /// Number of cases in this subtree
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len() + self.children.iter().map(Self::case_count).sum::<usize>()
    }

    /// Sum of `unexpected` over this suite and all descendants
    #[must_use]
    pub fn total_unexpected(&self) -> usize {
        self.unexpected
            + self
                .children
                .iter()
                .map(Self::total_unexpected)
                .sum::<usize>()
    }

    /// Depth-first search for a suite by name, including `self`
    #[must_use]
    pub fn find_suite(&self, name: &str) -> Option<&TestSuite> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_suite(name))
    }
}
