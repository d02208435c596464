//! Golden snapshot tests for codegen
//!
//! These tests generate Java wrappers from `.json` manifests and compare
//! the output against stored snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use subjectgen::backend::generate_all;
use subjectgen::model::Manifest;

/// Generate every wrapper of a manifest, separated by blank lines
fn generate_java(manifest: &str) -> String {
    let manifest = Manifest::from_json(manifest).expect("manifest failed to parse");
    let subjects = manifest.subjects().expect("manifest failed to validate");
    let sources = generate_all(&subjects, manifest.config()).expect("generation failed");
    sources.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("\n")
}

/// Load a manifest from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.json", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_bar_subject_codegen() {
    let java_code = generate_java(&load_test_file("bar_subject"));
    insta::assert_snapshot!("bar_subject", java_code);
}

#[test]
fn test_nested_subject_codegen() {
    let java_code = generate_java(&load_test_file("nested_subject"));
    insta::assert_snapshot!("nested_subject", java_code);
}

#[test]
fn test_primitive_subject_codegen() {
    let java_code = generate_java(&load_test_file("primitive_subject"));
    insta::assert_snapshot!("primitive_subject", java_code);
}

#[test]
fn test_configured_subject_codegen() {
    let java_code = generate_java(&load_test_file("configured_subject"));
    insta::assert_snapshot!("configured_subject", java_code);
}

/// Every manifest in the snapshot directory must produce the same text twice.
#[test]
fn test_all_manifests_generate_deterministically() {
    insta::glob!("codegen_snapshots/*.json", |path| {
        let manifest = fs::read_to_string(path).unwrap();
        assert_eq!(generate_java(&manifest), generate_java(&manifest));
    });
}
