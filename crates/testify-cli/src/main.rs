// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testify: decode raw XCTest console output into a JSON suite tree
//!
//! Reads the output of `swift test` / `xcodebuild test` from a file or stdin
//! and prints the decoded suites, cases and failures as JSON.

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use testify_cli::config::Config;
use testify_cli::run;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(?config, "Starting testify");

    run::run(&config).context("Failed to decode test log")?;
    Ok(())
}
