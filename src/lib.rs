//! A small tool and library for reading per-core CPU identification and
//! frequency data on Linux, from `/proc/cpuinfo` and
//! `/sys/devices/system/cpu/cpu<N>/`.
//!
//! The main entry point for library users is [`get_cpu_info`]; the `cpufi`
//! binary goes through [`start_cpufi`].

#![warn(rust_2018_idioms)]

pub mod collection;
pub mod options;
pub mod output;

pub mod utils {
    pub mod conversion;
    pub mod data_prefixes;
    pub mod logging;
    pub mod strings;
}

use std::io;

use anyhow::Context;
use clap::Parser;

pub use crate::collection::cpuinfo::{
    AuxField, AuxiliarySource, CpuInfoSources, CpuRecord, KeyValue, SysfsCpu, get_cpu_info,
    parse_cpu_info, parse_entry, read_cpu_info,
};
use crate::{
    options::{args::Args, get_or_create_config, init_options},
    output::write_records,
};

/// Parses arguments, reads CPU data once, and prints it to stdout.
pub fn start_cpufi() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(debug_log) = &args.general_args.debug_log {
        #[cfg(feature = "logging")]
        utils::logging::init_logger(log::LevelFilter::Debug, debug_log.as_os_str())
            .context("Unable to set up the debug log.")?;

        #[cfg(not(feature = "logging"))]
        eprintln!(
            "Ignoring '--debug_log {}', cpufi was built without the 'logging' feature.",
            debug_log.display()
        );
    }

    let config = get_or_create_config(args.general_args.config_location.as_deref())
        .context("Unable to properly parse or create the config file.")?;
    let options = init_options(&args, &config)?;

    let records = options.select(get_cpu_info(&options.sources));
    log::debug!("read {} cpu records from {:?}", records.len(), options.sources);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, &records, &options.output)
}
