//! Per-core values that `/proc/cpuinfo` does not carry, read from
//! `/sys/devices/system/cpu/cpu<N>/`.

use std::path::{Path, PathBuf};

use concat_string::concat_string;

use super::numeric::parse_decimal;
use crate::collection::{error::CollectionError, linux::utils::read_bounded};

/// The default root of the per-core sysfs tree.
pub const DEFAULT_SYSFS_CPU_PATH: &str = "/sys/devices/system/cpu";

/// Capacity of the scratch buffer used for each single-value file.
pub const AUX_BUFFER_LEN: usize = 8 * 1024;

/// A value looked up per core, outside of `/proc/cpuinfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxField {
    MinFrequency,
    MaxFrequency,
    CurrentFrequency,
    PackageId,
}

impl AuxField {
    /// Every field, in the order they are looked up.
    pub const ALL: [AuxField; 4] = [
        AuxField::MinFrequency,
        AuxField::MaxFrequency,
        AuxField::CurrentFrequency,
        AuxField::PackageId,
    ];

    /// The path of this field's file, relative to `cpu<N>/`.
    pub fn relative_path(self) -> &'static str {
        match self {
            AuxField::MinFrequency => "cpufreq/cpuinfo_min_freq",
            AuxField::MaxFrequency => "cpufreq/cpuinfo_max_freq",
            AuxField::CurrentFrequency => "cpufreq/scaling_cur_freq",
            AuxField::PackageId => "topology/physical_package_id",
        }
    }
}

/// Something that can answer per-core lookups by CPU index.
///
/// A lookup that cannot be answered returns `None`; the caller keeps the
/// field's default. This is expected (offline cores, or hardware without
/// frequency scaling) and is not an error.
pub trait AuxiliarySource {
    fn lookup(&mut self, cpu: u32, field: AuxField) -> Option<i64>;
}

/// Looks up [`AuxField`] values from a sysfs CPU tree.
pub struct SysfsCpu {
    root: PathBuf,
    buffer: [u8; AUX_BUFFER_LEN],
}

impl SysfsCpu {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            buffer: [0; AUX_BUFFER_LEN],
        }
    }

    /// The path a field is read from for the given CPU.
    pub fn path_of(&self, cpu: u32, field: AuxField) -> PathBuf {
        self.root
            .join(concat_string!("cpu", cpu.to_string()))
            .join(field.relative_path())
    }

    /// Reads and parses a single field. The error names the file that could
    /// not be read.
    pub fn read(&mut self, cpu: u32, field: AuxField) -> Result<i64, CollectionError> {
        let path = self.path_of(cpu, field);
        read_bounded(&path, &mut self.buffer).map(parse_decimal)
    }
}

impl Default for SysfsCpu {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_CPU_PATH)
    }
}

impl AuxiliarySource for SysfsCpu {
    fn lookup(&mut self, cpu: u32, field: AuxField) -> Option<i64> {
        match self.read(cpu, field) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("skipping {field:?} for cpu{cpu}, {err}");
                None
            }
        }
    }
}
