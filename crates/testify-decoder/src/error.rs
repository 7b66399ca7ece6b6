// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testify-decoder

use thiserror::Error;

/// Errors that can occur while decoding a raw test log
///
/// Decoding itself is tolerant: malformed lines are skipped rather than
/// reported. The only hard failure is a log that yields no suite at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No `Test Suite ... started` marker could be decoded from the input
    #[error("No root test suite found in input")]
    NoRootSuite,
}
