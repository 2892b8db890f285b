//! Runs against a captured `/proc/cpuinfo` and sysfs tree from a four-core
//! big.LITTLE phone. The last core has no cpufreq directory, like an offline
//! core would.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{SNAPSHOT_CPUINFO, SNAPSHOT_SYSFS_CPU, cpufi_command, snapshot_cpufi_command};

#[test]
fn test_table() {
    let output = snapshot_cpufi_command().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("CPU  PKG  IMPLEMENTER"));
    assert!(lines[1].starts_with("0    0    0x41 (ARM)"));
    assert!(lines[1].ends_with("300 MHz  1.80 GHz  1.21 GHz"));
    assert!(lines[2].ends_with("300 MHz  1.80 GHz  576 MHz"));
    assert!(lines[3].contains("0xd09"));
    assert!(lines[3].ends_with("653 MHz  2.21 GHz  2.21 GHz"));
    assert!(lines[4].starts_with("3    1"));
    assert!(lines[4].ends_with(&format!("-{}-{}-", " ".repeat(8), " ".repeat(9))));
}

#[test]
fn test_plain_with_cpu_filter() {
    snapshot_cpufi_command()
        .args(["-f", "plain", "-c", "3", "--cpu", "2"])
        .assert()
        .success()
        .stdout(indoc::indoc! {"
            CPU: 2 Freq
            Min : 652800, Max : 2208000, Current : 2208000
            ------------------------------
            CPU: 3 Freq
            Min : 0, Max : 0, Current : 0
            ------------------------------
        "});
}

#[test]
fn test_json() {
    let output = snapshot_cpufi_command().arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = value.as_array().unwrap();

    assert_eq!(records.len(), 4);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["index"], i);
        assert_eq!(record["implementer"], 0x41);
        assert_eq!(record["architecture"], 8);
    }

    assert_eq!(records[0]["part"], 0xd03);
    assert_eq!(records[0]["revision"], 4);
    assert_eq!(records[0]["current_frequency"], 1_209_600);
    assert_eq!(records[2]["variant"], 1);
    assert_eq!(records[2]["part"], 0xd09);
    assert_eq!(records[2]["package_id"], 1);
    assert_eq!(records[3]["max_frequency"], 0);
    assert_eq!(records[3]["package_id"], 1);
}

#[test]
fn test_decimal_ids() {
    snapshot_cpufi_command()
        .args(["--decimal_ids", "--no_header", "-c", "2"])
        .assert()
        .success()
        .stdout("2  1  65 (ARM)  8  1  3337  2  653 MHz  2.21 GHz  2.21 GHz\n");
}

#[test]
fn test_config_sources() {
    cpufi_command(&["-C", "./tests/valid_configs/snapshot_plain.toml", "-c", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "CPU: 0 Freq\nMin : 300000, Max : 1804800, Current : 1209600\n",
        ));
}

#[test]
fn test_missing_sysfs() {
    cpufi_command(&[
        "-C",
        "./tests/valid_configs/empty_config.toml",
        "--cpuinfo",
        SNAPSHOT_CPUINFO,
        "--sysfs_cpu",
        "/nonexistent/cpu",
        "--json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"package_id\": -1").count(4));
}

#[test]
fn test_missing_cpuinfo() {
    cpufi_command(&[
        "-C",
        "./tests/valid_configs/empty_config.toml",
        "--cpuinfo",
        "/nonexistent/cpuinfo",
        "--sysfs_cpu",
        SNAPSHOT_SYSFS_CPU,
    ])
    .assert()
    .success()
    .stdout("CPU  PKG  IMPLEMENTER  ARCH  VARIANT  PART  REV  MIN  MAX  CUR\n");
}
