// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fb-core: Domain types for the fuzzbuild build orchestrator

pub mod badge;
pub mod clock;
pub mod fuzzing_engine;
pub mod project;
pub mod record;
pub mod sanitizer;
pub mod status;
pub mod step;

pub use badge::{Badge, BADGE_IMAGE_TYPES};
pub use clock::{Clock, FakeClock, SystemClock};
pub use fuzzing_engine::{EngineInfo, FuzzingEngine};
pub use project::ProjectDescriptor;
pub use record::{entity_key, BuildRecord, BuildTag, LastSuccessfulBuild, MAX_BUILD_HISTORY};
pub use sanitizer::{Sanitizer, SanitizerEntry, UnknownSanitizer};
pub use status::{
    sort_projects, BuildRef, BuildStatus, HistoryEntry, ProjectStatus, RemoteBuild, StatusRank,
    StatusSnapshot, MAX_BUILD_LOGS,
};
pub use step::{BuildRequest, BuildStep};
