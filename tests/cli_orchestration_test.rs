// tests/cli_orchestration_test.rs
mod common;

use common::TestRepo;
use git_vers::cli::{run, RunArgs};
use git_vers::LanguageVersions;
use serial_test::serial;
use std::env;
use tempfile::TempDir;

fn args_for(test_repo: &TestRepo) -> RunArgs {
    RunArgs {
        repo: Some(test_repo.path().to_path_buf()),
        ..RunArgs::default()
    }
}

#[test]
fn test_calculates_from_repository() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("README.md", "hello\n", "Initial commit");
    test_repo.tag("v1.4.0", head);

    let outcome = run(&args_for(&test_repo)).unwrap();
    // "+dirty" appears when no native git is available
    assert!(outcome.versions.semver.starts_with("1.4.0"));
    assert!(outcome.warnings.is_empty());
    assert!(!outcome.used_fallback);
}

#[test]
fn test_version_prefix_is_applied() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("README.md", "hello\n", "Initial commit");
    test_repo.tag("v1.4.0", head);

    let args = RunArgs {
        version_prefix: Some("5.0.0".to_string()),
        ..args_for(&test_repo)
    };
    let outcome = run(&args).unwrap();
    assert!(outcome.versions.semver.starts_with("5.0.0"));
}

#[test]
fn test_not_a_repository_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let args = RunArgs {
        repo: Some(dir.path().to_path_buf()),
        ..RunArgs::default()
    };

    let outcome = run(&args).unwrap();
    assert!(outcome.used_fallback);
    assert_eq!(outcome.versions, LanguageVersions::fallback());
}

#[test]
fn test_empty_repository_uses_fallback() {
    let test_repo = TestRepo::new();
    let outcome = run(&args_for(&test_repo)).unwrap();
    assert!(outcome.used_fallback);
    assert_eq!(outcome.versions.semver, "0.0.0-dev");
    assert_eq!(outcome.versions.python, "0.0.0.dev0");
}

#[test]
fn test_unknown_commitish_warns_and_falls_back() {
    let mut test_repo = TestRepo::new();
    test_repo.commit("README.md", "hello\n", "Initial commit");

    let args = RunArgs {
        commitish: Some("feature-x".to_string()),
        ..args_for(&test_repo)
    };
    let outcome = run(&args).unwrap();

    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("'feature-x' does not exist"));
    assert!(outcome.used_fallback);
}

#[test]
fn test_version_string_bypasses_repository() {
    let dir = TempDir::new().unwrap();
    let args = RunArgs {
        commitish: Some("v2.0.0-beta.2".to_string()),
        repo: Some(dir.path().to_path_buf()),
        ..RunArgs::default()
    };

    let outcome = run(&args).unwrap();
    assert!(!outcome.used_fallback);
    assert_eq!(outcome.versions.semver, "2.0.0-beta.2");
    assert_eq!(outcome.versions.python, "2.0.0b2");
    assert_eq!(outcome.versions.go, "v2.0.0-beta.2");
}

#[test]
fn test_two_part_version_is_input_error() {
    let mut test_repo = TestRepo::new();
    test_repo.commit("README.md", "hello\n", "Initial commit");

    let args = RunArgs {
        commitish: Some("1.2".to_string()),
        ..args_for(&test_repo)
    };
    let err = run(&args).unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("version must have exactly 3 parts"));
}

#[test]
fn test_invalid_tag_pattern_is_error() {
    let mut test_repo = TestRepo::new();
    test_repo.commit("README.md", "hello\n", "Initial commit");

    let args = RunArgs {
        tag_pattern: Some("(".to_string()),
        ..args_for(&test_repo)
    };
    let err = run(&args).unwrap_err();
    assert!(err.is_input_error());
}

#[test]
#[serial]
fn test_uses_current_directory_by_default() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("README.md", "hello\n", "Initial commit");
    test_repo.tag("v0.9.0", head);

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(test_repo.path()).expect("Could not change to temp dir");
    let outcome = run(&RunArgs::default());
    env::set_current_dir(original_dir).unwrap();

    let outcome = outcome.unwrap();
    assert!(outcome.versions.semver.starts_with("0.9.0"));
}
