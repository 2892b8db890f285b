use std::path::PathBuf;

use serde::Deserialize;

/// Overrides for where CPU data is read from.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub(crate) struct SourceConfig {
    pub(crate) cpuinfo: Option<PathBuf>,
    pub(crate) sysfs_cpu: Option<PathBuf>,
}
