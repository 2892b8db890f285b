//! Reading CPU data from the kernel.

pub mod cpuinfo;
pub mod error;

pub(crate) mod linux {
    pub(crate) mod utils;
}
