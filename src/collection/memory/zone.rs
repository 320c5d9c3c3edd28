//! Zone-aware memory collection for illumos and Solaris.
//!
//! Hosts that support zones report memory differently depending on where we
//! are running. The global zone can see the physical memory of the machine via
//! `prtconf`, while a non-global zone only gets to know its configured memory
//! cap, which `zonememstat` reports.
//!
//! Note that the two paths do not agree on units: `prtconf` reports megabytes,
//! while the cap is passed through in whatever unit `zonememstat` prints. No
//! conversion is done here.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use super::{SwapMemoryStat, VirtualMemoryStat};
use crate::collection::{
    command::CommandRunner,
    error::{CollectionError, CollectionResult},
};

pub const DEFAULT_ZONENAME_PATH: &str = "/usr/bin/zonename";
pub const DEFAULT_PRTCONF_PATH: &str = "/usr/sbin/prtconf";
pub const DEFAULT_ZONEMEMSTAT_PATH: &str = "/usr/bin/zonememstat";

const GLOBAL_ZONE_NAME: &str = "global";

/// Offset of the CAP column in `zonememstat -H` output, which is laid out as
/// zone ID, RSS, CAP, NOVER, POUT, SWAP%.
const CAP_OFFSET: usize = 2;

static MEMORY_SIZE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Memory size: ([0-9]+) Megabytes").expect("memory size regex should be valid")
});

/// Where to find the tools used for collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolPaths {
    pub zonename: PathBuf,
    pub prtconf: PathBuf,
    pub zonememstat: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            zonename: PathBuf::from(DEFAULT_ZONENAME_PATH),
            prtconf: PathBuf::from(DEFAULT_PRTCONF_PATH),
            zonememstat: PathBuf::from(DEFAULT_ZONEMEMSTAT_PATH),
        }
    }
}

/// The kind of zone we are running in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZoneKind {
    Global,
    NonGlobal(String),
}

impl ZoneKind {
    pub fn from_name(name: &str) -> Self {
        if name == GLOBAL_ZONE_NAME {
            ZoneKind::Global
        } else {
            ZoneKind::NonGlobal(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ZoneKind::Global => GLOBAL_ZONE_NAME,
            ZoneKind::NonGlobal(name) => name,
        }
    }
}

/// Collects memory information for the zone the process is running in.
#[derive(Debug, Default)]
pub struct ZoneMemory<R> {
    runner: R,
    tools: ToolPaths,
}

impl<R: CommandRunner> ZoneMemory<R> {
    /// Creates a new [`ZoneMemory`] that looks for tools at their default
    /// locations.
    pub fn new(runner: R) -> Self {
        Self::with_tools(runner, ToolPaths::default())
    }

    pub fn with_tools(runner: R, tools: ToolPaths) -> Self {
        Self { runner, tools }
    }

    /// Returns the total memory available to the current zone. Nothing other
    /// than `total` is filled in.
    pub fn virtual_memory(&self) -> CollectionResult<VirtualMemoryStat> {
        let zone = self.zone()?;

        self.virtual_memory_in(&zone)
    }

    /// Same as [`ZoneMemory::virtual_memory`], but for an already known zone.
    pub fn virtual_memory_in(&self, zone: &ZoneKind) -> CollectionResult<VirtualMemoryStat> {
        let total = match zone {
            ZoneKind::Global => self.global_zone_memory_capacity()?,
            ZoneKind::NonGlobal(name) => self.non_global_zone_memory_capacity(name)?,
        };

        Ok(VirtualMemoryStat {
            total,
            ..Default::default()
        })
    }

    /// Swap is not supported for zones.
    pub fn swap_memory(&self) -> CollectionResult<SwapMemoryStat> {
        Err(CollectionError::NotImplemented)
    }

    /// Returns the name of the current zone, with any trailing newline removed.
    pub fn zone_name(&self) -> CollectionResult<String> {
        let out = self.run_tool(&self.tools.zonename, &[])?;

        parse_zone_name(out)
    }

    pub fn zone(&self) -> CollectionResult<ZoneKind> {
        let name = self.zone_name()?;
        let kind = ZoneKind::from_name(&name);
        log::debug!("running in zone '{name}' ({kind:?})");

        Ok(kind)
    }

    fn global_zone_memory_capacity(&self) -> CollectionResult<u64> {
        let out = self.run_tool(&self.tools.prtconf, &[])?;

        parse_prtconf_memory(&String::from_utf8_lossy(&out))
    }

    fn non_global_zone_memory_capacity(&self, zone_name: &str) -> CollectionResult<u64> {
        let out = self.run_tool(&self.tools.zonememstat, &["-H", "-z", zone_name])?;

        parse_zonememstat_cap(&String::from_utf8_lossy(&out))
    }

    fn run_tool(&self, path: &Path, args: &[&str]) -> CollectionResult<Vec<u8>> {
        let tool = self.runner.find_tool(path)?;

        self.runner.run(&tool, args)
    }
}

fn parse_zone_name(out: Vec<u8>) -> CollectionResult<String> {
    let name = String::from_utf8(out)
        .map_err(|_| CollectionError::parse("zone name is not valid UTF-8"))?;

    Ok(name.trim_end_matches(['\r', '\n']).to_string())
}

/// Pulls the memory size out of `prtconf` output. Exactly one matching line
/// must be present; more than one is treated as ambiguous.
fn parse_prtconf_memory(out: &str) -> CollectionResult<u64> {
    let mut captures = MEMORY_SIZE_REGEX.captures_iter(out);

    match (captures.next(), captures.next()) {
        (Some(caps), None) => caps[1].parse().map_err(|_| {
            CollectionError::parse(format!("invalid memory size '{}' from prtconf", &caps[1]))
        }),
        _ => Err(CollectionError::parse(
            "memory size not contained in output of prtconf",
        )),
    }
}

fn parse_zonememstat_cap(out: &str) -> CollectionResult<u64> {
    let fields: Vec<&str> = out.split_whitespace().collect();

    cap_from_fields(&fields)
}

fn cap_from_fields(fields: &[&str]) -> CollectionResult<u64> {
    match fields.get(CAP_OFFSET) {
        Some(cap) if !cap.is_empty() => {
            if !cap.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CollectionError::parse(format!(
                    "invalid memory cap '{cap}' from zonememstat"
                )));
            }

            cap.parse().map_err(|_| {
                CollectionError::parse(format!("invalid memory cap '{cap}' from zonememstat"))
            })
        }
        _ => Err(CollectionError::parse(
            "cannot find memory capacity for non-global zone",
        )),
    }
}
