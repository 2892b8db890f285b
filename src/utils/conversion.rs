//! Converting raw kernel values into something readable.

use crate::utils::data_prefixes::*;

/// Returns the most appropriate unit and denominator for a frequency given in
/// kHz, which is what cpufreq reports.
#[inline]
pub(crate) fn get_khz_unit_and_denominator(khz: u64) -> (&'static str, f64) {
    match khz {
        k if k < KILO_LIMIT => ("kHz", 1.0),
        k if k < MEGA_LIMIT => ("MHz", KILO_LIMIT_F64),
        _ => ("GHz", MEGA_LIMIT_F64),
    }
}

/// Returns a string for a frequency in kHz. Values of a gigahertz or more get
/// two decimal places.
#[inline]
pub(crate) fn khz_string(khz: u64) -> String {
    let (unit, denominator) = get_khz_unit_and_denominator(khz);
    let value = khz as f64 / denominator;

    if khz >= MEGA_LIMIT {
        format!("{value:.2} {unit}")
    } else {
        format!("{value:.0} {unit}")
    }
}
