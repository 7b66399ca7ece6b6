// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for testify-decoder
//!
//! These tests decode captured `swift test` output and check the resulting
//! suite tree end to end.

use std::path::Path;

use chrono::NaiveDate;
use similar_asserts::assert_eq;
use testify_decoder::{FailureInfo, Outcome, RawTestResultDecoder, TestSuite, decode};

/// Get the fixtures directory for test data
fn fixtures_dir() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

fn suite_names(suites: &[TestSuite]) -> Vec<&str> {
    suites.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn test_decode_passing_fixture() {
    let root = decode(&read_fixture("swift-test-passing.log")).expect("Should decode");

    assert_eq!(root.name, "All tests");
    assert_eq!(root.outcome, Outcome::Success);
    assert_eq!(suite_names(&root.children), vec!["TestifyPackageTests.xctest"]);

    let bundle = &root.children[0];
    assert_eq!(
        suite_names(&bundle.children),
        vec!["OutcomeTests", "RawTestResultDecoderTests"]
    );
    assert!(bundle.cases.is_empty());

    let decoder_tests = &bundle.children[1];
    let names: Vec<&str> = decoder_tests
        .cases
        .iter()
        .map(|c| c.test_name.as_str())
        .collect();
    assert_eq!(names, vec!["testDecodeNested", "testDecodeSingle"]);
    assert!(decoder_tests.cases.iter().all(|c| c.failure_info.is_none()));
    assert!(
        decoder_tests
            .cases
            .iter()
            .all(|c| c.module_name == "TestifyTests" && c.class_name == "RawTestResultDecoderTests")
    );

    assert_eq!(root.case_count(), 3);
    assert_eq!(root.total_unexpected(), 0);
    assert!(root.failing_cases().is_empty());
}

#[test]
fn test_decode_passing_fixture_timestamps() {
    let root = decode(&read_fixture("swift-test-passing.log")).expect("Should decode");

    let day = NaiveDate::from_ymd_opt(2023, 2, 12).expect("valid date");
    assert_eq!(
        root.start_date,
        day.and_hms_milli_opt(14, 30, 5, 123).expect("valid time")
    );
    assert_eq!(
        root.end_date,
        day.and_hms_milli_opt(14, 30, 5, 143).expect("valid time")
    );
    assert_eq!(root.duration().num_milliseconds(), 20);
    assert!(root.end_date >= root.start_date);
}

#[test]
fn test_decode_failing_fixture() {
    let root = decode(&read_fixture("swift-test-failing.log")).expect("Should decode");

    assert_eq!(root.outcome, Outcome::Failure);
    assert_eq!(root.unexpected, 1);

    let login = root.find_suite("LoginTests").expect("LoginTests suite");
    assert_eq!(login.outcome, Outcome::Failure);
    assert_eq!(login.unexpected, 0);
    assert_eq!(login.cases.len(), 2);

    let invalid = &login.cases[0];
    assert_eq!(invalid.test_name, "testInvalidPassword");
    assert_eq!(invalid.outcome, Outcome::Failure);
    assert_eq!(invalid.duration, 0.031);
    assert_eq!(
        invalid.failure_info,
        Some(FailureInfo {
            file: "/Users/dev/App/Tests/AppTests/LoginTests.swift".to_string(),
            line: 27,
            reason: "XCTAssertEqual failed: (\"401\") is not equal to (\"200\") - unexpected status"
                .to_string(),
        })
    );

    let valid = &login.cases[1];
    assert_eq!(valid.outcome, Outcome::Success);
    assert_eq!(valid.failure_info, None);

    let signup = root.find_suite("SignupTests").expect("SignupTests suite");
    assert_eq!(signup.unexpected, 1);
    let thrown = signup.cases[0].failure_info.as_ref().expect("failure info");
    assert_eq!(thrown.file, "<unknown>");
    assert_eq!(thrown.line, 0);
    assert_eq!(thrown.reason, "failed: caught error: \"boom\"");

    let failing: Vec<String> = root.failing_cases().iter().map(|c| c.full_name()).collect();
    assert_eq!(
        failing,
        vec![
            "AppTests.LoginTests/testInvalidPassword".to_string(),
            "AppTests.SignupTests/testThrows".to_string(),
        ]
    );
    assert_eq!(root.total_unexpected(), 3);
}

/// A second top-level suite is never returned as a sibling of the first.
///
/// Once the first root closes it stays on the stack, so the second one is
/// attached to it as a child when it closes. Callers that concatenate logs
/// from separate runs should decode them separately.
#[test]
fn test_second_top_level_suite_nests_under_first() {
    let root = decode(&read_fixture("two-top-level-suites.log")).expect("Should decode");

    assert_eq!(root.name, "First");
    assert_eq!(suite_names(&root.children), vec!["Second"]);
    assert_eq!(root.cases.len(), 1);
    assert_eq!(root.children[0].cases[0].test_name, "testTwo");
}

#[test]
fn test_case_started_but_never_finished() {
    let log = "\
Test Suite 'S' started at 2023-02-12 10:00:00.000
Test Case '-[M.C testHangs]' started.
some diagnostic output";

    let root = decode(log).expect("Should decode");
    assert!(root.all_cases().is_empty());
}

#[test]
fn test_decoding_is_deterministic_across_instances() {
    let log = read_fixture("swift-test-failing.log");
    let first = RawTestResultDecoder::new().decode(&log);
    let second = RawTestResultDecoder::default().decode(&log);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_decoder_is_shareable_across_threads() {
    let decoder = std::sync::Arc::new(RawTestResultDecoder::new());
    let log = std::sync::Arc::new(read_fixture("swift-test-passing.log"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let decoder = decoder.clone();
            let log = log.clone();
            std::thread::spawn(move || decoder.decode(&log))
        })
        .collect();

    let expected = decoder.decode(&log);
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}

#[test]
fn test_suite_json_serialization() {
    let root = decode(&read_fixture("swift-test-failing.log")).expect("Should decode");

    let json = serde_json::to_string_pretty(&root).expect("Failed to serialize suite");
    assert!(json.contains("\"outcome\": \"failure\""));
    assert!(json.contains("\"outcome\": \"success\""));
    assert!(json.contains("\"start_date\": \"2023-02-12T14:31:10.500\""));
    assert!(json.contains("\"module_name\": \"AppTests\""));

    let deserialized: TestSuite = serde_json::from_str(&json).expect("Failed to deserialize suite");
    assert_eq!(root, deserialized);
}
