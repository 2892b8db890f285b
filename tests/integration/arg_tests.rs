//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{cpufi_command, no_cfg_cpufi_command};

#[test]
fn test_invalid_format() {
    no_cfg_cpufi_command()
        .arg("-f")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn test_json_conflicts_with_format() {
    no_cfg_cpufi_command()
        .arg("--json")
        .arg("--format")
        .arg("plain")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_negative_cpu() {
    no_cfg_cpufi_command()
        .arg("--cpu")
        .arg("-1")
        .assert()
        .failure();
}

#[test]
fn test_cpu_not_a_number() {
    no_cfg_cpufi_command()
        .arg("-c")
        .arg("big")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid digit"));
}

#[test]
fn test_unknown_flag() {
    no_cfg_cpufi_command()
        .arg("--watch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '--watch'"));
}

#[test]
fn test_help() {
    cpufi_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source Options"))
        .stdout(predicate::str::contains("--sysfs_cpu"));
}

#[test]
fn test_version() {
    cpufi_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(not(feature = "logging"))]
#[test]
fn test_debug_log_without_feature() {
    no_cfg_cpufi_command()
        .arg("--debug_log")
        .arg("./cpufi.log")
        .arg("--cpuinfo")
        .arg("/nonexistent/cpuinfo")
        .assert()
        .success()
        .stderr(predicate::str::contains("built without the 'logging' feature"));
}
