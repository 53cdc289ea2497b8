// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use pkgbuild_matrix::logging::LOG_ENV;
use pkgbuild_matrix::PKGBUILD;

/// Create a package directory containing a `PKGBUILD`.
fn create_package(root: &Path, name: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(PKGBUILD), format!("pkgname={name}\n")).unwrap();
}

/// Run the binary inside `dir` with logging disabled.
fn matrix_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pkgbuild_matrix").unwrap();
    cmd.current_dir(dir.path()).env_remove(LOG_ENV);
    cmd
}

#[test]
fn test_lists_packages_in_current_directory() {
    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgB");
    create_package(dir.path(), "pkgA");
    fs::write(dir.path().join("notes.txt"), "no package here").unwrap();

    matrix_in(&dir)
        .assert()
        .success()
        .stdout("[\"pkgA\",\"pkgB\"]\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_directory_fails() {
    let dir = TempDir::new().unwrap();

    matrix_in(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: Got empty list.\n");
}

#[test]
fn test_explicit_elements_are_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgA");
    create_package(dir.path(), "pkgB");
    create_package(dir.path(), "pkgC");

    matrix_in(&dir)
        .args(["--elements", "pkgB", "pkgA", "missing"])
        .assert()
        .success()
        .stdout("[\"pkgA\",\"pkgB\"]\n");
}

#[test]
fn test_plain_file_element_fails_with_empty_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pkgA"), "a file, not a directory").unwrap();

    matrix_in(&dir)
        .args(["-e", "pkgA"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr("Error: Got empty list.\n");
}

#[test]
fn test_duplicate_elements_are_listed_once() {
    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgA");

    matrix_in(&dir)
        .args(["-e", "pkgA", "pkgA"])
        .assert()
        .success()
        .stdout("[\"pkgA\"]\n");
}

#[test]
fn test_flag_without_values_fails_with_empty_list() {
    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgA");

    matrix_in(&dir)
        .arg("--elements")
        .assert()
        .failure()
        .stderr("Error: Got empty list.\n");
}

#[test]
fn test_directory_without_pkgbuild_is_excluded() {
    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgA");
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs").join("pkgbuild"), "").unwrap();
    create_package(&dir.path().join("group"), "nested");

    matrix_in(&dir)
        .assert()
        .success()
        .stdout("[\"pkgA\"]\n");
}

#[test]
fn test_unknown_flag_is_rejected() {
    let dir = TempDir::new().unwrap();

    matrix_in(&dir)
        .arg("--recursive")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_logging_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgA");

    matrix_in(&dir)
        .env(LOG_ENV, "debug")
        .assert()
        .success()
        .stdout("[\"pkgA\"]\n")
        .stderr(predicate::str::contains("Built matrix: candidates=1, packages=1"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_package_directory_fails() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    create_package(dir.path(), "pkgA");
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores directory permissions, nothing to check then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = matrix_in(&dir).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to list directory").and(
            predicate::str::contains("locked"),
        ));
}
