//! Config loading facade: assembles sources in precedence order.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::ResolverConfig;
use crate::error::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads `ResolverConfig`
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{CONTAINER_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<ResolverConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ResolverConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace_root = %workspace_root.display(),
            containers = config.containers.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a single file, skipping global and workspace files
    pub fn load_from_file(path: &Path) -> Result<ResolverConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Invalid(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path));
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Global config file location, if HOME or XDG_CONFIG_HOME is set
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
