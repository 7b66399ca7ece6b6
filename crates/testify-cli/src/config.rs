// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the testify command
//!
//! This module provides the command-line options: where the raw log comes
//! from, where the JSON goes, how timestamps are parsed, and logging levels.

use std::path::{Path, PathBuf};

use clap::Parser;
use testify_decoder::RawTestResultDecoder;

/// Path value meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Testify - decode raw XCTest console output into a JSON suite tree
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testify")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Raw test log to decode
    ///
    /// Reads standard input when omitted or `-`, e.g.
    ///   swift test 2>&1 | testify
    pub input: Option<PathBuf>,

    /// Write the JSON result to this file instead of stdout
    #[arg(short, long, env = "TESTIFY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed output
    #[arg(long, default_value = "false")]
    pub compact: bool,

    /// chrono format string for suite timestamps
    ///
    /// Defaults to `%Y-%m-%d %H:%M:%S%.3f`, matching XCTest output.
    #[arg(long, env = "TESTIFY_DATE_FORMAT")]
    pub date_format: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the JSON output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Log a one-line summary of cases, failures and unexpected failures
    #[arg(long, default_value = "false")]
    pub summary: bool,
}

impl Config {
    /// The input file, or `None` when reading standard input
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new(STDIN_PATH))
    }

    /// Build the decoder described by this configuration
    #[must_use]
    pub fn decoder(&self) -> RawTestResultDecoder {
        match self.date_format {
            Some(ref format) => RawTestResultDecoder::new().with_date_format(format.clone()),
            None => RawTestResultDecoder::new(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path is specified but doesn't exist
    /// - The input path is a directory
    /// - The date format is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(input) = self.input_path() {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.to_path_buf()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.to_path_buf()));
            }
        }

        if self.date_format.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::EmptyDateFormat);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),

    /// `--date-format` was given an empty string
    #[error("Date format must not be empty")]
    EmptyDateFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use testify_decoder::DEFAULT_DATE_FORMAT;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.input.is_none());
        assert!(config.output.is_none());
        assert!(config.date_format.is_none());
        assert!(!config.compact);
        assert!(!config.verbose);
        assert!(!config.quiet);
        assert!(!config.summary);
    }

    #[test]
    fn test_input_path_stdin() {
        let config = Config::default();
        assert_eq!(config.input_path(), None);

        let config = Config {
            input: Some(PathBuf::from("-")),
            ..Default::default()
        };
        assert_eq!(config.input_path(), None);
    }

    #[test]
    fn test_input_path_file() {
        let config = Config {
            input: Some(PathBuf::from("run.log")),
            ..Default::default()
        };
        assert_eq!(config.input_path(), Some(Path::new("run.log")));
    }

    #[test]
    fn test_decoder_date_format() {
        assert_eq!(Config::default().decoder().date_format(), DEFAULT_DATE_FORMAT);

        let config = Config {
            date_format: Some("%d.%m.%Y %H:%M:%S%.3f".to_string()),
            ..Default::default()
        };
        assert_eq!(config.decoder().date_format(), "%d.%m.%Y %H:%M:%S%.3f");
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_nonexistent_input() {
        let config = Config {
            input: Some(PathBuf::from("/nonexistent/path/12345.log")),
            ..Default::default()
        };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InputNotFound(_))));
    }

    #[test]
    fn test_validate_directory_input() {
        let config = Config {
            input: Some(std::env::temp_dir()),
            ..Default::default()
        };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InputNotFile(_))));
    }

    #[test]
    fn test_validate_empty_date_format() {
        let config = Config {
            date_format: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyDateFormat)
        ));
    }

    #[test]
    fn test_validate_stdin() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
