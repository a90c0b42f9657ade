// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup. Logs go to stderr; stdout carries only command output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Filter directives: `FB_LOG`, then `RUST_LOG`, then `info`.
pub fn filter_directives() -> String {
    ["FB_LOG", "RUST_LOG"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn init() {
    let filter = EnvFilter::try_new(filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
