//! Integration tests for cpufi.

mod util;

mod arg_tests;
mod invalid_config_tests;

#[cfg(target_os = "linux")]
mod snapshot_tests;
