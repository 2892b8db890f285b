//! Config files that should be rejected.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::cpufi_command;

#[test]
fn test_toml_mismatch_type() {
    cpufi_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_invalid_format() {
    cpufi_command(&["-C", "./tests/invalid_configs/invalid_format.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'format' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_toml() {
    cpufi_command(&["-C", "./tests/invalid_configs/lone_bracket.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to properly parse or create the config file",
        ));
}

#[test]
fn test_invalid_format_is_fine_if_overridden() {
    cpufi_command(&[
        "-C",
        "./tests/invalid_configs/invalid_format.toml",
        "--json",
        "--cpuinfo",
        "/nonexistent/cpuinfo",
    ])
    .assert()
    .success()
    .stdout("[]\n");
}
