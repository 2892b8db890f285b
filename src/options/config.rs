pub mod flags;
pub mod source;

use serde::Deserialize;

use self::{flags::FlagConfig, source::SourceConfig};

/// The contents of a config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
    #[serde(default)]
    pub(crate) source: SourceConfig,
}

/// The default config file, written out with every option commented out.
pub const CONFIG_TEXT: &str = r#"# This is a default config file for cpufi. All of the settings are commented
# out by default; if you wish to change them, uncomment and modify as you see fit.

[flags]
# The output format; one of "table", "plain", or "json".
#format = "table"
# Whether to show implementer, variant, and part IDs in decimal.
#decimal_ids = false
# Whether to hide the table header.
#no_header = false

[source]
# The file to read processor entries from.
#cpuinfo = "/proc/cpuinfo"
# The directory to read per-core frequency and topology values from.
#sysfs_cpu = "/sys/devices/system/cpu"
"#;
