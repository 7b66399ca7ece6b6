// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the raw log decoder
//!
//! Arbitrary text must never make the decoder panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use testify_decoder::RawTestResultDecoder;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let decoder = RawTestResultDecoder::new();
        if let Some(root) = decoder.decode(input) {
            // Walking the tree should never panic either
            let _ = root.case_count();
            let _ = root.failing_cases();
        }
    }
});
