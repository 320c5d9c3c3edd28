//! Memory data collection.

use serde::Serialize;

use crate::collection::{command::SystemCommandRunner, error::CollectionResult};

pub mod zone;

pub use self::zone::{ToolPaths, ZoneKind, ZoneMemory};

/// Virtual memory statistics.
///
/// Only `total` is filled in by the zone backend. The remaining fields are
/// left at zero and should be read as unknown rather than as a real reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMemoryStat {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub free: u64,
    pub used_percent: f64,
}

/// Swap memory statistics. Never populated by the zone backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapMemoryStat {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub used_percent: f64,
}

/// Returns virtual memory statistics using the host's tools at their default
/// locations.
pub fn virtual_memory() -> CollectionResult<VirtualMemoryStat> {
    ZoneMemory::new(SystemCommandRunner).virtual_memory()
}

/// Returns swap memory statistics. This always fails for the zone backend.
pub fn swap_memory() -> CollectionResult<SwapMemoryStat> {
    ZoneMemory::new(SystemCommandRunner).swap_memory()
}
