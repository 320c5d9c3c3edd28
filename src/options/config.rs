pub mod flags;
pub mod tools;

use serde::Deserialize;

use self::{flags::FlagConfig, tools::ToolConfig};

/// The default config file, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "zonemem/zonemem.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
    #[serde(default)]
    pub(crate) tools: ToolConfig,
}
