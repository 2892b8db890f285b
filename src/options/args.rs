// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself. It is pulled in with `include!`, so no inner attributes here.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "cpufi [OPTIONS]";

/// The arguments for cpufi.
#[derive(Parser, Debug, Default)]
#[command(
    name = "cpufi",
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub source_args: SourceArgs,

    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created there."
    )]
    pub config_location: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to the given file.",
        long_help = "Writes debug logs to the given file. This only has an effect if cpufi was built \
                    with the 'logging' feature."
    )]
    pub debug_log: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Source Options", rename_all = "snake_case")]
pub struct SourceArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Reads processor entries from this file instead of /proc/cpuinfo.",
        long_help = "Reads processor entries from this file instead of /proc/cpuinfo. Useful for \
                    inspecting a captured copy from another machine."
    )]
    pub cpuinfo: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Reads per-core values from this directory instead of /sys/devices/system/cpu.",
        long_help = indoc! {
            "Reads per-core values from this directory instead of /sys/devices/system/cpu.
            For each processor N, the following files are looked up if they exist:
              cpuN/cpufreq/cpuinfo_min_freq
              cpuN/cpufreq/cpuinfo_max_freq
              cpuN/cpufreq/scaling_cur_freq
              cpuN/topology/physical_package_id"
        }
    )]
    pub sysfs_cpu: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options", rename_all = "snake_case")]
pub struct OutputArgs {
    #[arg(
        short = 'c',
        long = "cpu",
        value_name = "N",
        action = ArgAction::Append,
        help = "Only shows the given logical CPU. Can be repeated.",
    )]
    pub cpus: Vec<u32>,

    #[arg(
        long,
        help = "Shows implementer, variant, and part IDs in decimal.",
        long_help = "Shows implementer, variant, and part IDs in decimal rather than hexadecimal. \
                    Has no effect on JSON output, which is always numeric."
    )]
    pub decimal_ids: bool,

    #[arg(
        short = 'f',
        long,
        value_name = "FORMAT",
        value_parser = ["table", "plain", "json"],
        help = "Sets the output format.",
        long_help = indoc! {
            "Sets the output format. Supported values are:
            - table (an aligned table, the default)
            - plain (a block of frequencies per CPU)
            - json  (an array of records)"
        }
    )]
    pub format: Option<String>,

    #[arg(
        long,
        conflicts_with = "format",
        help = "Shorthand for '--format json'."
    )]
    pub json: bool,

    #[arg(long, help = "Hides the table header.")]
    pub no_header: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options", rename_all = "snake_case")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}
