// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved project descriptor.

use crate::fuzzing_engine::FuzzingEngine;
use crate::sanitizer::{Sanitizer, SanitizerEntry};
use serde::Serialize;

/// Registry prefix for project images when project.yaml names none.
pub const DEFAULT_IMAGE_PREFIX: &str = "gcr.io/oss-fuzz/";

/// A project with every project.yaml default already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDescriptor {
    pub name: String,
    pub image: String,
    pub sanitizers: Vec<SanitizerEntry>,
    pub fuzzing_engines: Vec<FuzzingEngine>,
    pub run_tests: bool,
}

impl ProjectDescriptor {
    /// Descriptor for `name` with the default image, sanitizers and engines.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            image: default_image(&name),
            name,
            sanitizers: Sanitizer::DEFAULT
                .into_iter()
                .map(SanitizerEntry::new)
                .collect(),
            fuzzing_engines: FuzzingEngine::DEFAULT.to_vec(),
            run_tests: true,
        }
    }

    /// Sanitizers to build, in project.yaml order, with coverage always last
    /// unless the project already listed it.
    pub fn effective_sanitizers(&self) -> Vec<Sanitizer> {
        let mut sanitizers: Vec<Sanitizer> = Vec::with_capacity(self.sanitizers.len() + 1);
        for entry in &self.sanitizers {
            if !sanitizers.contains(&entry.sanitizer) {
                sanitizers.push(entry.sanitizer);
            }
        }
        if !sanitizers.contains(&Sanitizer::Coverage) {
            sanitizers.push(Sanitizer::Coverage);
        }
        sanitizers
    }

    /// Every (engine, sanitizer) pair the engines can actually build.
    pub fn build_configurations(&self) -> Vec<(FuzzingEngine, Sanitizer)> {
        let sanitizers = self.effective_sanitizers();
        let mut configurations = Vec::new();
        for &engine in &self.fuzzing_engines {
            for &sanitizer in &sanitizers {
                if engine.supports(sanitizer) {
                    configurations.push((engine, sanitizer));
                }
            }
        }
        configurations
    }
}

pub fn default_image(name: &str) -> String {
    format!("{}{}", DEFAULT_IMAGE_PREFIX, name)
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
