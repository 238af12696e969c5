//! World-subsystem error type.

use thiserror::Error;

use rp_core::RegionId;

/// Errors produced by `rp-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("region {0} not found in graph")]
    RegionNotFound(RegionId),

    #[error("unknown region key {0:?}")]
    UnknownRegionKey(String),

    #[error("movement from {0} to itself requested")]
    SameRegion(RegionId),

    #[error("no path from {from} to {to}")]
    Unreachable { from: RegionId, to: RegionId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("invalid speed profile: {0}")]
    InvalidProfile(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
