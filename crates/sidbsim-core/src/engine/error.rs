use crate::core::models::coords::SiqadCoord;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("coordinate {coord} is not a site of the bound layout")]
    OutOfRange { coord: SiqadCoord },

    #[error("charge index of {num_sites} sites in base {base} does not fit into 64 bits")]
    ChargeIndexOverflow { num_sites: usize, base: u8 },

    #[error("charge index {index} exceeds the maximum index {max}")]
    InvalidChargeIndex { index: u64, max: u64 },
}
