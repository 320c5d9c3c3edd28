//! Zone-aware memory reporting for illumos and Solaris.
//!
//! The main entry points are [`collection::memory::virtual_memory`] and
//! [`collection::memory::swap_memory`]. [`collection::memory::ZoneMemory`] can
//! be built over any [`collection::CommandRunner`] for more control.

#![warn(rust_2018_idioms)]

pub mod collection;
pub mod options;

pub mod utils {
    pub mod logging;
}

use std::fmt::Write;

use anyhow::Context;

use crate::{
    collection::{memory::ZoneMemory, CommandRunner},
    options::{OutputFormat, Query, ZoneMemoryOptions},
};

/// Runs the query described by `options` and returns what should be printed.
pub fn report<R: CommandRunner>(options: &ZoneMemoryOptions, runner: R) -> anyhow::Result<String> {
    let memory = ZoneMemory::with_tools(runner, options.tools.clone());

    match options.query {
        Query::SwapMemory => {
            let stat = memory
                .swap_memory()
                .context("Unable to collect swap memory.")?;

            match options.output {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&stat)?),
                OutputFormat::Text => Ok(format!("swap total: {}", stat.total)),
            }
        }
        Query::VirtualMemory => {
            let zone = memory
                .zone()
                .context("Unable to determine the current zone.")?;
            let stat = memory
                .virtual_memory_in(&zone)
                .with_context(|| format!("Unable to collect memory for zone '{}'.", zone.name()))?;

            match options.output {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&stat)?),
                OutputFormat::Text => {
                    let mut out = String::new();
                    writeln!(out, "zone: {}", zone.name())?;
                    write!(out, "total: {}", stat.total)?;

                    Ok(out)
                }
            }
        }
    }
}
