//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use self::{
    config::Config,
    error::{OptionError, OptionResult},
};
use self::{args::Args, config::DEFAULT_CONFIG_FILE_LOCATION};
use crate::collection::memory::ToolPaths;

/// What to query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    VirtualMemory,
    SwapMemory,
}

/// How results get printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// The final options after merging the config file and arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneMemoryOptions {
    pub query: Query,
    pub output: OutputFormat,
    pub tools: ToolPaths,
}

/// Returns the config path to use. If no path is explicitly given, this
/// falls back to the default location in the user's config directory.
pub fn get_config_path(config_location: Option<&str>) -> Option<PathBuf> {
    match config_location {
        Some(location) => Some(PathBuf::from(location)),
        None => dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION)),
    }
}

/// Reads the config file at `config_path`.
///
/// An explicitly passed path has to exist, while a missing default config file
/// just means the default [`Config`] is used. Nothing is ever written.
pub fn read_config(config_path: Option<&Path>, explicit: bool) -> OptionResult<Config> {
    let Some(path) = config_path else {
        return Ok(Config::default());
    };

    if !explicit && !path.exists() {
        return Ok(Config::default());
    }

    let config_string = fs::read_to_string(path).map_err(|err| {
        OptionError::config(format!(
            "could not read the config file at '{}': {err}",
            path.display()
        ))
    })?;

    Ok(toml_edit::de::from_str(&config_string)?)
}

/// Merges the config file with arguments. Arguments take precedence.
pub fn init_options(args: &Args, config: &Config) -> OptionResult<ZoneMemoryOptions> {
    let query = if args.general_args.swap {
        Query::SwapMemory
    } else {
        Query::VirtualMemory
    };

    let json = args.general_args.json
        || config
            .flags
            .as_ref()
            .and_then(|flags| flags.json)
            .unwrap_or(false);

    let output = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let defaults = ToolPaths::default();
    let tools = ToolPaths {
        zonename: get_tool_path(
            "zonename",
            args.tool_args.zonename.as_deref(),
            config.tools.zonename.as_deref(),
            defaults.zonename,
        )?,
        prtconf: get_tool_path(
            "prtconf",
            args.tool_args.prtconf.as_deref(),
            config.tools.prtconf.as_deref(),
            defaults.prtconf,
        )?,
        zonememstat: get_tool_path(
            "zonememstat",
            args.tool_args.zonememstat.as_deref(),
            config.tools.zonememstat.as_deref(),
            defaults.zonememstat,
        )?,
    };

    Ok(ZoneMemoryOptions {
        query,
        output,
        tools,
    })
}

/// Tools are expected at fixed locations, so any override must be absolute.
fn get_tool_path(
    name: &str, arg: Option<&Path>, config: Option<&Path>, default: PathBuf,
) -> OptionResult<PathBuf> {
    if let Some(path) = arg {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Err(OptionError::invalid_arg_value(name))
        }
    } else if let Some(path) = config {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Err(OptionError::invalid_config_value(&format!("tools.{name}")))
        }
    } else {
        Ok(default)
    }
}
