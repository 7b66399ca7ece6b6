// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testify-cli

use testify_decoder::DecodeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while running the decoder from the command line
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Error reading the log or writing the result
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the suite tree
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The log contained no decodable suite
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
