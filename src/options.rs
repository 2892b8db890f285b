//! How cpufi is configured, from both the config file and command line arguments.

pub mod args;
pub mod config;
pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use self::{
    args::Args,
    config::{CONFIG_TEXT, Config},
    error::{OptionError, OptionResult},
};
use crate::{
    collection::cpuinfo::{CpuInfoSources, CpuRecord},
    output::{OutputFormat, OutputOptions},
};

/// Default location of the config file, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "cpufreq-info/config.toml";

/// Everything needed for a single run, after merging arguments and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub sources: CpuInfoSources,
    pub output: OutputOptions,

    /// If non-empty, only these logical CPUs are shown.
    pub cpus: Vec<u32>,
}

impl Options {
    /// Drops any records that were filtered out with `--cpu`.
    pub fn select(&self, mut records: Vec<CpuRecord>) -> Vec<CpuRecord> {
        if !self.cpus.is_empty() {
            records.retain(|record| self.cpus.contains(&record.index()));
        }

        records
    }
}

macro_rules! is_flag_enabled {
    ($flag_name:ident, $arg:expr, $config:expr) => {
        if $arg {
            true
        } else if let Some(flags) = &$config.flags {
            flags.$flag_name.unwrap_or(false)
        } else {
            false
        }
    };
}

/// Returns the path of the config file to use. An explicitly given path always
/// wins; otherwise this is [`DEFAULT_CONFIG_FILE_LOCATION`] under the user's
/// config directory, if there is one.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_config_path {
        return Some(path.to_path_buf());
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_CONFIG_FILE_LOCATION);
        path
    })
}

/// Reads the config file at the resolved path. If it does not exist, a default
/// (fully commented-out) one is written there and the defaults are used.
///
/// Failing to write a default file is only an error if the path was given
/// explicitly.
pub fn get_or_create_config(override_config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = get_config_path(override_config_path) else {
        return Ok(Config::default());
    };

    if let Ok(config_string) = fs::read_to_string(&path) {
        return Ok(toml_edit::de::from_str(&config_string)?);
    }

    match write_default_config(&path) {
        Ok(()) => {}
        Err(err) if override_config_path.is_some() => return Err(err.into()),
        Err(err) => log::warn!("unable to create a default config at {path:?}: {err}"),
    }

    Ok(Config::default())
}

fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent_path) = path.parent() {
        fs::create_dir_all(parent_path)?;
    }

    fs::write(path, CONFIG_TEXT)
}

/// Merges arguments and config into [`Options`]. Arguments take precedence.
pub fn init_options(args: &Args, config: &Config) -> OptionResult<Options> {
    let sources = get_sources(args, config);
    let output = OutputOptions {
        format: get_format(args, config)?,
        decimal_ids: is_flag_enabled!(decimal_ids, args.output_args.decimal_ids, config),
        show_header: !is_flag_enabled!(no_header, args.output_args.no_header, config),
    };

    Ok(Options {
        sources,
        output,
        cpus: args.output_args.cpus.clone(),
    })
}

fn get_sources(args: &Args, config: &Config) -> CpuInfoSources {
    let defaults = CpuInfoSources::default();
    let source_args = &args.source_args;

    CpuInfoSources {
        cpuinfo: source_args
            .cpuinfo
            .clone()
            .or_else(|| config.source.cpuinfo.clone())
            .unwrap_or(defaults.cpuinfo),
        sysfs_cpu: source_args
            .sysfs_cpu
            .clone()
            .or_else(|| config.source.sysfs_cpu.clone())
            .unwrap_or(defaults.sysfs_cpu),
    }
}

fn get_format(args: &Args, config: &Config) -> OptionResult<OutputFormat> {
    let output_args = &args.output_args;

    if output_args.json {
        return Ok(OutputFormat::Json);
    }

    // Values from clap were already checked against the list of possible values.
    if let Some(format) = &output_args.format {
        return format
            .parse()
            .map_err(|_| OptionError::Argument(format!("'{format}' is not a valid format.").into()));
    }

    match config.flags.as_ref().and_then(|flags| flags.format.as_deref()) {
        Some(format) => format
            .parse()
            .map_err(|_| OptionError::invalid_config_value("format")),
        None => Ok(OutputFormat::default()),
    }
}
