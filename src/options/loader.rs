//! Layered settings loading: global file, workspace files, environment.

use super::sources::{environment, global_file, workspace_file};
use super::{create_config, PartialOptions, StoreDevtoolsConfig};
use crate::error::DevtoolsError;
use crate::logging::LoggingConfig;
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings document: devtools options plus logging.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DevtoolsSettings {
    /// Partial devtools options; defaults are applied at normalization
    #[serde(default)]
    pub options: PartialOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DevtoolsSettings {
    /// Normalize the loaded options.
    pub fn to_config(&self) -> StoreDevtoolsConfig {
        create_config(self.options.clone())
    }
}

/// Loads [`DevtoolsSettings`] from files and the environment.
///
/// No defaults are injected: keys nobody set stay absent so that normalization
/// decides them.
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load settings for `workspace_root`, using the global file from the user's
    /// config directory.
    pub fn load(workspace_root: &Path) -> Result<DevtoolsSettings, DevtoolsError> {
        let global_path = Self::global_config_path();
        Self::load_with_global(workspace_root, global_path.as_deref())
    }

    /// Load settings with an explicit global file (or none).
    pub fn load_with_global(
        workspace_root: &Path,
        global_path: Option<&Path>,
    ) -> Result<DevtoolsSettings, DevtoolsError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder, global_path);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = environment::add_to_builder(builder);

        let settings: DevtoolsSettings = builder.build()?.try_deserialize()?;
        debug!(
            workspace_root = %workspace_root.display(),
            "Devtools settings loaded"
        );
        Ok(settings)
    }

    /// Load settings from a single file, without the environment layer.
    pub fn load_from_file(path: &Path) -> Result<DevtoolsSettings, DevtoolsError> {
        if !path.exists() {
            return Err(DevtoolsError::Config(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }

        let settings: DevtoolsSettings = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Path of the global settings file, if a config directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
