// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn fb_log_takes_precedence() {
    std::env::set_var("FB_LOG", "fb_engine=debug");
    std::env::set_var("RUST_LOG", "warn");
    assert_eq!(filter_directives(), "fb_engine=debug");
    std::env::remove_var("FB_LOG");
    std::env::remove_var("RUST_LOG");
}

#[test]
#[serial]
fn rust_log_is_the_fallback() {
    std::env::remove_var("FB_LOG");
    std::env::set_var("RUST_LOG", "warn");
    assert_eq!(filter_directives(), "warn");
    std::env::remove_var("RUST_LOG");
}

#[test]
#[serial]
fn defaults_to_info() {
    std::env::set_var("FB_LOG", "");
    std::env::remove_var("RUST_LOG");
    assert_eq!(filter_directives(), "info");
    std::env::remove_var("FB_LOG");
}
