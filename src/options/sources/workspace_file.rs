//! Workspace settings files under `<root>/config/`.

use super::add_existing_file;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable selecting the environment-specific settings file.
pub const ENV_VAR: &str = "STORE_DEVTOOLS_ENV";

/// Candidate workspace files, lowest precedence first:
/// `config/devtools.toml`, then `config/{STORE_DEVTOOLS_ENV}.toml` (default `development`).
pub fn workspace_config_paths(workspace_root: &Path) -> [PathBuf; 2] {
    let config_dir = workspace_root.join("config");
    let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());
    [
        config_dir.join("devtools.toml"),
        config_dir.join(format!("{}.toml", env_name)),
    ]
}

/// Add whichever workspace files exist to the builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    workspace_config_paths(workspace_root)
        .iter()
        .fold(builder, |builder, path| {
            let (builder, added) = add_existing_file(builder, path);
            if added {
                debug!(config_path = %path.display(), "Workspace settings file added");
            }
            builder
        })
}
