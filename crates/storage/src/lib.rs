// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fb-storage: Persisted build records and last-successful-build state

mod file;
mod memory;
mod state;
mod store;

pub use file::{FileStore, CURRENT_STORE_VERSION};
pub use memory::MemoryStore;
pub use state::StoreState;
pub use store::{record_build, EntityStore, StorageError};
