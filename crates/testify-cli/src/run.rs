// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Decoding a log from the command line
//!
//! Reads the raw log from a file or stdin, decodes it, and writes the suite
//! tree as JSON to a file or stdout.

use std::fs::File;
use std::io::{self, Read, Write};

use testify_decoder::TestSuite;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CliError;

/// Aggregate counts over a decoded suite tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of suites, including the root
    pub suites: usize,
    /// Number of cases
    pub cases: usize,
    /// Number of failing cases
    pub failures: usize,
    /// Sum of unexpected failure counts
    pub unexpected: usize,
}

impl RunSummary {
    /// Summarize a suite tree
    #[must_use]
    pub fn of(root: &TestSuite) -> Self {
        let mut suites = 0;
        let mut pending = vec![root];
        while let Some(suite) = pending.pop() {
            suites += 1;
            pending.extend(suite.children.iter());
        }

        Self {
            suites,
            cases: root.case_count(),
            failures: root.failing_cases().len(),
            unexpected: root.total_unexpected(),
        }
    }
}

/// Serialize a suite tree to JSON
///
/// # Errors
///
/// Returns `CliError::Json` if serialization fails.
pub fn render(suite: &TestSuite, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(suite)?
    } else {
        serde_json::to_string_pretty(suite)?
    };
    Ok(json)
}

/// Decode everything from `input` and write JSON to `output`
///
/// # Errors
///
/// Returns `CliError::Io` if reading or writing fails, `CliError::Decode`
/// if the log has no root suite, and `CliError::Json` if serialization fails.
pub fn run_with(
    config: &Config,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<TestSuite, CliError> {
    // test output may carry arbitrary bytes from the code under test
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "Read raw test log");

    let root = config.decoder().decode_root(&text)?;

    let summary = RunSummary::of(&root);
    debug!(?summary, suite = %root.name, "Decoded test log");
    if config.summary {
        info!(
            suite = %root.name,
            outcome = %root.outcome,
            suites = summary.suites,
            cases = summary.cases,
            failures = summary.failures,
            unexpected = summary.unexpected,
            "Test run summary"
        );
    }

    let json = render(&root, config.compact)?;
    output.write_all(json.as_bytes())?;
    output.write_all(b"\n")?;
    output.flush()?;

    Ok(root)
}

/// Run the command described by `config`
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration, otherwise the
/// errors of [`run_with`].
pub fn run(config: &Config) -> Result<TestSuite, CliError> {
    config.validate()?;

    let input: Box<dyn Read> = match config.input_path() {
        Some(path) => {
            info!(path = %path.display(), "Decoding test log");
            Box::new(File::open(path)?)
        }
        None => {
            info!("Decoding test log from stdin");
            Box::new(io::stdin().lock())
        }
    };

    match config.output {
        Some(ref path) => {
            // only touch the output file once decoding succeeded
            let mut buffer = Vec::new();
            let root = run_with(config, input, &mut buffer)?;
            std::fs::write(path, buffer)?;
            info!(path = %path.display(), "Wrote decoded suite");
            Ok(root)
        }
        None => run_with(config, input, io::stdout().lock()),
    }
}
