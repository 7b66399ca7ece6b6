// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testify-decoder: Raw XCTest log decoding
//!
//! This library crate turns the console output of `swift test` /
//! `xcodebuild test` into a typed tree of test suites and test cases, with
//! timings, outcomes and failure locations.
//!
//! # Example
//!
//! ```
//! use testify_decoder::{RawTestResultDecoder, Outcome};
//!
//! let log = "\
//! Test Suite 'All tests' started at 2023-02-12 10:00:00.000
//! Test Case '-[AppTests.LoginTests testLogin]' started.
//! Test Case '-[AppTests.LoginTests testLogin]' passed (0.004 seconds).
//! Test Suite 'All tests' passed at 2023-02-12 10:00:00.010.
//! ";
//!
//! let suite = RawTestResultDecoder::new().decode(log).unwrap();
//! assert_eq!(suite.outcome, Outcome::Success);
//! assert_eq!(suite.case_count(), 1);
//! ```

pub mod decoder;
pub mod error;
pub mod extract;
pub mod result;

pub use decoder::{DEFAULT_DATE_FORMAT, RawTestResultDecoder, decode};
pub use error::DecodeError;
pub use result::{FailureInfo, Outcome, TestCase, TestSuite};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::decoder::RawTestResultDecoder;
    pub use crate::error::DecodeError;
    pub use crate::result::{FailureInfo, Outcome, TestCase, TestSuite};
}
