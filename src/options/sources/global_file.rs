//! Global settings file: $XDG_CONFIG_HOME/store-devtools/devtools.toml or ~/.config/store-devtools/devtools.toml

use super::add_existing_file;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path to the global settings file.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("store-devtools").join("devtools.toml"))
}

/// Add the global settings file to the builder, warning when it is missing.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    let Some(global_path) = path else {
        return builder;
    };
    let (builder, added) = add_existing_file(builder, global_path);
    if !added {
        warn!(
            config_path = %global_path.display(),
            "Global devtools settings not found. \
             Consider creating it for user-level defaults."
        );
    }
    builder
}
