// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testify-cli library
//!
//! This module exports the command-line plumbing of `testify` for use in
//! integration tests and as a library.

pub mod config;
pub mod error;
pub mod run;

pub use error::CliError;
