// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_applies_defaults() {
    let project = ProjectDescriptor::new("libpng");
    assert_eq!(project.image, "gcr.io/oss-fuzz/libpng");
    assert_eq!(project.fuzzing_engines, FuzzingEngine::DEFAULT.to_vec());
    assert!(project.run_tests);
    let sanitizers: Vec<_> = project.sanitizers.iter().map(|e| e.sanitizer).collect();
    assert_eq!(sanitizers, vec![Sanitizer::Address, Sanitizer::Undefined]);
}

#[test]
fn coverage_is_appended_when_missing() {
    let project = ProjectDescriptor::new("zlib");
    assert_eq!(
        project.effective_sanitizers(),
        vec![
            Sanitizer::Address,
            Sanitizer::Undefined,
            Sanitizer::Coverage
        ]
    );
}

#[test]
fn coverage_keeps_its_listed_position() {
    let mut project = ProjectDescriptor::new("zlib");
    project.sanitizers = vec![
        Sanitizer::Coverage.into(),
        Sanitizer::Memory.into(),
        Sanitizer::Address.into(),
    ];
    assert_eq!(
        project.effective_sanitizers(),
        vec![Sanitizer::Coverage, Sanitizer::Memory, Sanitizer::Address]
    );
}

#[test]
fn empty_sanitizer_list_still_builds_coverage() {
    let mut project = ProjectDescriptor::new("zlib");
    project.sanitizers.clear();
    assert_eq!(project.effective_sanitizers(), vec![Sanitizer::Coverage]);
}

#[test]
fn build_configurations_skip_unsupported_pairs() {
    let mut project = ProjectDescriptor::new("zlib");
    project.sanitizers = vec![
        Sanitizer::Address.into(),
        Sanitizer::Memory.into(),
        Sanitizer::Undefined.into(),
    ];
    assert_eq!(
        project.build_configurations(),
        vec![
            (FuzzingEngine::Libfuzzer, Sanitizer::Address),
            (FuzzingEngine::Libfuzzer, Sanitizer::Memory),
            (FuzzingEngine::Libfuzzer, Sanitizer::Undefined),
            (FuzzingEngine::Libfuzzer, Sanitizer::Coverage),
            (FuzzingEngine::Afl, Sanitizer::Address),
            (FuzzingEngine::Honggfuzz, Sanitizer::Address),
            (FuzzingEngine::Honggfuzz, Sanitizer::Memory),
            (FuzzingEngine::Honggfuzz, Sanitizer::Undefined),
        ]
    );
}

#[test]
fn no_engines_means_no_configurations() {
    let mut project = ProjectDescriptor::new("zlib");
    project.fuzzing_engines.clear();
    assert!(project.build_configurations().is_empty());
}
