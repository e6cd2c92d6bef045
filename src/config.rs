//! Configuration System
//!
//! Layered configuration for the resolver: registered container types, default
//! resolution context and logging. Sources are merged by the `config` crate with
//! environment variable overrides.

use crate::context::{ExecutionMode, LanguageContext, WorkspaceContext};
use crate::logging::LoggingConfig;
use crate::record::{LanguageId, WorkspaceId};
use crate::registry::{ContainerConfiguration, ContainerRegistry};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Registered container types
    #[serde(default)]
    pub containers: Vec<ContainerConfiguration>,

    /// Resolution context used when the caller supplies none
    #[serde(default)]
    pub context: ContextDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default resolution context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextDefaults {
    #[serde(default = "default_mode")]
    pub mode: ExecutionMode,

    #[serde(default)]
    pub language_id: LanguageId,

    #[serde(default = "default_true")]
    pub perform_overlays: bool,

    #[serde(default)]
    pub workspace_id: WorkspaceId,
}

fn default_mode() -> ExecutionMode {
    ExecutionMode::BackEnd
}

fn default_true() -> bool {
    true
}

impl Default for ContextDefaults {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            language_id: 0,
            perform_overlays: default_true(),
            workspace_id: 0,
        }
    }
}

impl ContextDefaults {
    pub fn language_context(&self) -> LanguageContext {
        LanguageContext::new(self.language_id, self.perform_overlays)
    }

    pub fn workspace_context(&self) -> WorkspaceContext {
        WorkspaceContext::new(self.workspace_id)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Container(String, String),
    Context(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Container(ctype, msg) => {
                write!(f, "Container '{}': {}", ctype, msg)
            }
            ValidationError::Context(msg) => {
                write!(f, "Context: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ResolverConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for container in &self.containers {
            if container.ctype.trim().is_empty() {
                errors.push(ValidationError::Container(
                    container.ctype.clone(),
                    "CType cannot be empty".to_string(),
                ));
            }
            *seen.entry(container.ctype.as_str()).or_default() += 1;

            let mut col_positions = HashSet::new();
            for column in &container.columns {
                if !col_positions.insert(column.col_pos) {
                    errors.push(ValidationError::Container(
                        container.ctype.clone(),
                        format!("Duplicate colPos {}", column.col_pos),
                    ));
                }
            }
        }

        let mut duplicates: Vec<&str> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(ctype, _)| ctype)
            .collect();
        duplicates.sort_unstable();
        for ctype in duplicates {
            errors.push(ValidationError::Container(
                ctype.to_string(),
                "Registered more than once".to_string(),
            ));
        }

        if self.context.language_id < 0 {
            errors.push(ValidationError::Context(format!(
                "language_id must not be negative (got {})",
                self.context.language_id
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build a type registry from the registered container types
    pub fn registry(&self) -> ContainerRegistry {
        self.containers.iter().cloned().collect()
    }
}
