//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::cli::presentation::{format_containers_table, format_tree_json, format_tree_text};
use crate::config::{ConfigLoader, ResolverConfig};
use crate::context::{LanguageContext, WorkspaceContext};
use crate::registry::{ContainerConfiguration, ContainerRegistry};
use crate::resolve::ContainerResolver;
use crate::store::InMemoryRecordStore;
use anyhow::{bail, Context};
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: loaded configuration and workspace root.
pub struct RunContext {
    config: ResolverConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => ConfigLoader::load(&workspace_root).with_context(|| {
                format!("loading configuration for {}", workspace_root.display())
            })?,
        };
        Ok(Self::from_config(config, workspace_root))
    }

    pub fn from_config(config: ResolverConfig, workspace_root: PathBuf) -> Self {
        Self {
            config,
            workspace_root,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Resolve {
                uid,
                fixture,
                mode,
                language,
                no_overlays,
                workspace_id,
                ctypes,
                format,
            } => {
                let fixture = if fixture.is_absolute() {
                    fixture.clone()
                } else {
                    self.workspace_root.join(fixture)
                };
                let store = InMemoryRecordStore::load(&fixture)
                    .with_context(|| format!("loading fixture {}", fixture.display()))?;

                let mut registry = self.config.registry();
                for ctype in ctypes {
                    if registry.configuration(ctype).is_none() {
                        registry.register(ContainerConfiguration::new(ctype.clone()));
                    }
                }

                let defaults = &self.config.context;
                let mode = mode.unwrap_or(defaults.mode);
                let language = LanguageContext::new(
                    language.unwrap_or(defaults.language_id),
                    defaults.perform_overlays && !no_overlays,
                );
                let workspace = workspace_id
                    .map(WorkspaceContext::new)
                    .unwrap_or_else(|| defaults.workspace_context());

                let tree = ContainerResolver::new(&store, &registry)
                    .resolve_container(*uid, mode, &language, workspace)
                    .with_context(|| format!("resolving container {}", uid))?;
                info!(uid, children = tree.child_count(), "Resolved container");

                match format.as_str() {
                    "json" => Ok(format_tree_json(&tree)?),
                    "text" => Ok(format_tree_text(&tree, &registry)),
                    other => bail!("Invalid format: {} (must be 'text' or 'json')", other),
                }
            }
            Commands::Containers => Ok(format_containers_table(&self.registry())),
            Commands::Validate => match self.config.validate() {
                Ok(()) => Ok(format!(
                    "Configuration valid: {} container type(s) registered",
                    self.config.containers.len()
                )),
                Err(errors) => {
                    let messages: Vec<String> =
                        errors.iter().map(|e| format!("  - {}", e)).collect();
                    bail!("Configuration validation failed:\n{}", messages.join("\n"))
                }
            },
        }
    }

    fn registry(&self) -> ContainerRegistry {
        self.config.registry()
    }
}
