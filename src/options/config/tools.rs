use std::path::PathBuf;

use serde::Deserialize;

/// Overrides for where collection tools live. Anything unset falls back to the
/// default location.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct ToolConfig {
    pub(crate) zonename: Option<PathBuf>,
    pub(crate) prtconf: Option<PathBuf>,
    pub(crate) zonememstat: Option<PathBuf>,
}
