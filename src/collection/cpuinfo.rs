//! Per-core CPU identification and frequency data.
//!
//! The bulk of the data comes from `/proc/cpuinfo`, which is a flat stream of
//! `key : value` lines where each `processor` line starts a new logical CPU:
//!
//! ```text
//! processor       : 0
//! CPU implementer : 0x41
//! CPU architecture: 8
//! CPU variant     : 0x0
//! CPU part        : 0xd03
//! CPU revision    : 4
//!
//! processor       : 1
//! ...
//! ```
//!
//! Frequencies and the physical package are not in that file at all, so each
//! record is also cross-referenced against `/sys/devices/system/cpu/cpu<N>/`
//! through an [`AuxiliarySource`].
//!
//! Reading never fails from the caller's point of view. An unreadable source
//! gives an empty list, and anything else that is off (bad lines, missing
//! sysfs files, unparsable numbers) falls back to a default value.

mod entry;
mod numeric;
mod sysfs;

use std::{
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use serde::Serialize;

pub use self::{
    entry::{KeyValue, parse_entry},
    numeric::{parse_decimal, parse_hex},
    sysfs::{AUX_BUFFER_LEN, AuxField, AuxiliarySource, DEFAULT_SYSFS_CPU_PATH, SysfsCpu},
};
use self::numeric::narrow;

/// The default location of the primary source.
pub const DEFAULT_CPUINFO_PATH: &str = "/proc/cpuinfo";

/// The longest line that is kept; anything past this on the same line is dropped.
pub const MAX_LINE_LEN: usize = 16 * 1024;

/// The value of [`CpuRecord::package_id`] when it could not be read.
pub const UNKNOWN_PACKAGE_ID: i32 = -1;

/// The key that starts a new record.
const BOUNDARY_KEY: &[u8] = b"processor";

/// Data about a single logical CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuRecord {
    index: u32,

    /// The vendor ID (`CPU implementer`), e.g. `0x41` for ARM.
    pub implementer: u32,

    /// `CPU architecture`.
    pub architecture: u32,

    /// `CPU variant`.
    pub variant: u32,

    /// The core's part number (`CPU part`).
    pub part: u32,

    /// `CPU revision`.
    pub revision: u32,

    /// `cpufreq/cpuinfo_min_freq`, as reported by the kernel (kHz).
    pub min_frequency: u64,

    /// `cpufreq/cpuinfo_max_freq`, as reported by the kernel (kHz).
    pub max_frequency: u64,

    /// `cpufreq/scaling_cur_freq`, as reported by the kernel (kHz).
    pub current_frequency: u64,

    /// `topology/physical_package_id`, or [`UNKNOWN_PACKAGE_ID`].
    pub package_id: i32,
}

impl CpuRecord {
    /// Creates a record for the given logical CPU with every other field
    /// defaulted.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            implementer: 0,
            architecture: 0,
            variant: 0,
            part: 0,
            revision: 0,
            min_frequency: 0,
            max_frequency: 0,
            current_frequency: 0,
            package_id: UNKNOWN_PACKAGE_ID,
        }
    }

    /// The logical CPU index. This is fixed once the record is created.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the name of the vendor behind [`CpuRecord::implementer`], if
    /// it is a known one.
    ///
    /// Codes are the `MIDR_EL1` implementer IDs, see `ARM_CPU_IMP_*` in the
    /// kernel's `arch/arm64/include/asm/cputype.h`.
    pub fn implementer_name(&self) -> Option<&'static str> {
        let name = match self.implementer {
            0x41 => "ARM",
            0x42 => "Broadcom",
            0x43 => "Cavium",
            0x46 => "Fujitsu",
            0x48 => "HiSilicon",
            0x4e => "NVIDIA",
            0x51 => "Qualcomm",
            0x53 => "Samsung",
            0x61 => "Apple",
            0x69 => "Intel",
            0xc0 => "Ampere",
            _ => return None,
        };

        Some(name)
    }

    /// Sets a field from a `/proc/cpuinfo` entry. Keys that are not tracked
    /// are ignored.
    fn apply_entry(&mut self, entry: KeyValue<'_>) {
        let KeyValue { key, value } = entry;

        match key {
            b"CPU implementer" => self.implementer = narrow(parse_hex(value)),
            b"CPU architecture" => self.architecture = narrow(parse_decimal(value)),
            b"CPU variant" => self.variant = narrow(parse_hex(value)),
            b"CPU part" => self.part = narrow(parse_hex(value)),
            b"CPU revision" => self.revision = narrow(parse_decimal(value)),
            _ => {}
        }
    }

    /// Fills in the fields that only an [`AuxiliarySource`] knows about.
    fn apply_auxiliary<A: AuxiliarySource + ?Sized>(&mut self, source: &mut A) {
        for field in AuxField::ALL {
            let Some(value) = source.lookup(self.index, field) else {
                continue;
            };

            match field {
                AuxField::MinFrequency => self.min_frequency = narrow(value),
                AuxField::MaxFrequency => self.max_frequency = narrow(value),
                AuxField::CurrentFrequency => self.current_frequency = narrow(value),
                AuxField::PackageId => self.package_id = narrow(value),
            }
        }
    }
}

/// Where CPU data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuInfoSources {
    /// The `/proc/cpuinfo`-formatted text source.
    pub cpuinfo: PathBuf,

    /// The root of the per-core sysfs tree.
    pub sysfs_cpu: PathBuf,
}

impl Default for CpuInfoSources {
    fn default() -> Self {
        Self {
            cpuinfo: PathBuf::from(DEFAULT_CPUINFO_PATH),
            sysfs_cpu: PathBuf::from(DEFAULT_SYSFS_CPU_PATH),
        }
    }
}

/// Reads every logical CPU from the given sources, in the order they appear.
///
/// If the primary source cannot be opened, this returns an empty list.
pub fn get_cpu_info(sources: &CpuInfoSources) -> Vec<CpuRecord> {
    let file = match open_source(sources) {
        Ok(file) => file,
        Err(err) => {
            log::warn!("no cpu records read, {err}");
            return Vec::new();
        }
    };

    let mut sysfs = SysfsCpu::new(&sources.sysfs_cpu);
    read_cpu_info(BufReader::new(file), &mut sysfs)
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        #[inline]
        fn open_source(
            sources: &CpuInfoSources,
        ) -> crate::collection::error::CollectionResult<std::fs::File> {
            crate::collection::linux::utils::open_read_only(&sources.cpuinfo).map_err(|err| {
                crate::collection::error::CollectionError::unreadable(&sources.cpuinfo, err)
            })
        }
    } else {
        #[inline]
        fn open_source(
            _sources: &CpuInfoSources,
        ) -> crate::collection::error::CollectionResult<std::fs::File> {
            Err(crate::collection::error::CollectionError::Unsupported)
        }
    }
}

/// Parses already-loaded `/proc/cpuinfo` text, resolving per-core values
/// through `source`.
#[inline]
pub fn parse_cpu_info<A: AuxiliarySource + ?Sized>(text: &[u8], source: &mut A) -> Vec<CpuRecord> {
    read_cpu_info(text, source)
}

/// Folds `/proc/cpuinfo`-formatted lines from `reader` into records.
///
/// A read error part way through stops the scan; whatever was gathered up to
/// that point is returned.
pub fn read_cpu_info<R: BufRead, A: AuxiliarySource + ?Sized>(
    mut reader: R, source: &mut A,
) -> Vec<CpuRecord> {
    let mut records = Vec::with_capacity(16);
    let mut line = Vec::with_capacity(256);

    loop {
        line.clear();

        match read_line_bounded(&mut reader, &mut line, MAX_LINE_LEN) {
            Ok(0) => break,
            Ok(_) => fold_line(&mut records, &line, source),
            Err(err) => {
                log::warn!("stopped reading cpu info after {} records: {err}", records.len());
                break;
            }
        }
    }

    records
}

/// The fold step: applies a single line to the list of records.
fn fold_line<A: AuxiliarySource + ?Sized>(records: &mut Vec<CpuRecord>, line: &[u8], source: &mut A) {
    let Some(entry) = parse_entry(line) else {
        return;
    };

    if entry.key == BOUNDARY_KEY {
        let mut record = CpuRecord::new(narrow(parse_decimal(entry.value)));
        record.apply_auxiliary(source);
        records.push(record);
    } else if let Some(current) = records.last_mut() {
        current.apply_entry(entry);
    } else {
        log::trace!("ignoring {entry} before any processor entry");
    }
}

/// Reads one `\n`-terminated line into `line`, without the terminator.
///
/// At most `cap` bytes are kept; the rest of an overlong line is consumed and
/// dropped without being buffered. Returns the number of bytes consumed from
/// `reader`, so `0` means end of input.
fn read_line_bounded<R: BufRead>(reader: &mut R, line: &mut Vec<u8>, cap: usize) -> io::Result<usize> {
    let mut consumed = 0;

    loop {
        let (is_done, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            if available.is_empty() {
                return Ok(consumed);
            }

            let (chunk, is_done, used) = match available.iter().position(|&b| b == b'\n') {
                Some(newline) => (&available[..newline], true, newline + 1),
                None => (available, false, available.len()),
            };

            let room = cap.saturating_sub(line.len());
            line.extend_from_slice(&chunk[..chunk.len().min(room)]);

            (is_done, used)
        };

        reader.consume(used);
        consumed += used;

        if is_done {
            return Ok(consumed);
        }
    }
}
