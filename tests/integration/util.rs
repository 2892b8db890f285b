use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
    process::Command,
};

/// Returns a QEMU runner target given an architecture.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// Running the binary under cross needs the right runner, which can be found
/// by inspecting env variables that should only show up while using cross.
fn cross_runner() -> Option<String> {
    const TARGET_RUNNER: &str = "CARGO_TARGET_RUNNER";
    const CROSS_RUNNER: &str = "CROSS_RUNNER";

    let env_mapping = env::vars_os()
        .filter_map(|(k, v)| {
            let (k, v) = (k.to_string_lossy(), v.to_string_lossy());

            if k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty() {
                Some((TARGET_RUNNER.to_string(), v.to_string()))
            } else if k == CROSS_RUNNER && !v.is_empty() {
                Some((k.to_string(), v.to_string()))
            } else {
                None
            }
        })
        .collect::<HashMap<_, _>>();

    match env_mapping.get(CROSS_RUNNER) {
        Some(cross_runner) if cross_runner == "qemu-user" => env_mapping
            .get(TARGET_RUNNER)
            .and_then(|target_runner| target_runner.split_ascii_whitespace().last())
            .map(|arch| format!("qemu-{}", get_qemu_target(arch))),
        Some(_) => None,
        None => env_mapping.get(TARGET_RUNNER).cloned(),
    }
}

const CPUFI_EXE_PATH: &str = env!("CARGO_BIN_EXE_cpufi");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Arguments that take a path, which are made absolute before being passed on.
const PATH_ARGS: [&str; 4] = ["-C", "--config_location", "--cpuinfo", "--sysfs_cpu"];

/// The captured snapshot of a four-core big.LITTLE phone.
pub const SNAPSHOT_CPUINFO: &str = "./tests/data/big_little/cpuinfo";
pub const SNAPSHOT_SYSFS_CPU: &str = "./tests/data/big_little/cpu";

fn abs_path(path: &str) -> PathBuf {
    let path = Path::new(path);

    if path.is_relative() {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
    } else {
        path.to_path_buf()
    }
}

/// Returns the [`Command`] of a binary invocation of cpufi, alongside
/// any required env variables.
pub fn cpufi_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(CPUFI_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.arg(CPUFI_EXE_PATH);
            cmd
        }
    };

    let mut prev = "";
    for arg in args.iter() {
        if PATH_ARGS.contains(&prev) {
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of cpufi with the default,
/// empty config file.
pub fn no_cfg_cpufi_command() -> Command {
    cpufi_command(&DEFAULT_CFG)
}

/// Returns a command that reads from the captured snapshot, with the default,
/// empty config file.
pub fn snapshot_cpufi_command() -> Command {
    let mut args = DEFAULT_CFG.to_vec();
    args.extend_from_slice(&["--cpuinfo", SNAPSHOT_CPUINFO, "--sysfs_cpu", SNAPSHOT_SYSFS_CPU]);

    cpufi_command(&args)
}
