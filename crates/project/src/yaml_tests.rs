// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn empty_file_takes_all_defaults() {
    let project = parse_project_yaml("\n").unwrap().into_descriptor("zlib");
    assert_eq!(project, ProjectDescriptor::new("zlib"));
}

#[test]
fn unrelated_keys_are_ignored() {
    let yaml = r#"
homepage: "https://www.zlib.net"
primary_contact: "someone@example.com"
auto_ccs:
  - "other@example.com"
"#;
    let project = parse_project_yaml(yaml).unwrap().into_descriptor("zlib");
    assert_eq!(project.image, "gcr.io/oss-fuzz/zlib");
}

#[test]
fn explicit_values_override_defaults() {
    let yaml = r#"
name: libpng-proto
image: gcr.io/example/libpng
fuzzing_engines:
  - libfuzzer
  - none
run_tests: false
"#;
    let project = parse_project_yaml(yaml).unwrap().into_descriptor("libpng");
    assert_eq!(project.name, "libpng-proto");
    assert_eq!(project.image, "gcr.io/example/libpng");
    assert_eq!(project.fuzzing_engines, vec![FuzzingEngine::Libfuzzer, FuzzingEngine::NoEngine]);
    assert!(!project.run_tests);
}

#[test]
fn name_from_yaml_drives_default_image() {
    let project = parse_project_yaml("name: other\n").unwrap().into_descriptor("dir");
    assert_eq!(project.image, "gcr.io/oss-fuzz/other");
}

#[test]
fn sanitizers_accept_names_and_option_maps() {
    let yaml = r#"
sanitizers:
  - address
  - memory:
      experimental: true
  - undefined:
"#;
    let project = parse_project_yaml(yaml).unwrap().into_descriptor("curl");
    assert_eq!(
        project.sanitizers,
        vec![
            SanitizerEntry::new(Sanitizer::Address),
            SanitizerEntry::with_options(Sanitizer::Memory, json!({"experimental": true})),
            SanitizerEntry::new(Sanitizer::Undefined),
        ]
    );
}

#[test]
fn unknown_sanitizer_is_rejected() {
    let err = parse_project_yaml("sanitizers:\n  - thread\n").unwrap_err();
    assert!(err.to_string().contains("unknown sanitizer: thread"), "{}", err);
}

#[test]
fn unknown_engine_is_rejected() {
    assert!(parse_project_yaml("fuzzing_engines:\n  - radamsa\n").is_err());
}

#[test]
fn malformed_yaml_is_rejected() {
    assert!(parse_project_yaml("sanitizers: [address\n").is_err());
}
