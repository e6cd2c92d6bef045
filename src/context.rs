//! Resolution context: execution mode, language and workspace state.

use crate::record::{LanguageId, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Consuming context of a resolution
///
/// In the back end the requested uid already denotes the localized row; in the
/// front end it is the default-language uid and must be overlaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[serde(alias = "fe", alias = "frontend")]
    FrontEnd,
    #[serde(alias = "be", alias = "backend")]
    BackEnd,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::FrontEnd => write!(f, "frontend"),
            ExecutionMode::BackEnd => write!(f, "backend"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fe" | "frontend" => Ok(ExecutionMode::FrontEnd),
            "be" | "backend" => Ok(ExecutionMode::BackEnd),
            other => Err(format!(
                "Invalid execution mode: {} (must be 'frontend' or 'backend')",
                other
            )),
        }
    }
}

/// Requested language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageContext {
    pub language_id: LanguageId,
    /// Fall back to default-language content where no translation exists
    pub perform_overlays: bool,
}

impl LanguageContext {
    pub fn new(language_id: LanguageId, perform_overlays: bool) -> Self {
        Self {
            language_id,
            perform_overlays,
        }
    }

    pub fn default_language() -> Self {
        Self::new(0, true)
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::default_language()
    }
}

/// Active workspace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceContext {
    pub workspace_id: WorkspaceId,
}

impl WorkspaceContext {
    pub fn new(workspace_id: WorkspaceId) -> Self {
        Self { workspace_id }
    }

    pub fn live() -> Self {
        Self::new(0)
    }

    pub fn is_live(&self) -> bool {
        self.workspace_id == 0
    }
}

/// How a container's children relate to the default language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    /// Default language, no translation involved
    None,
    /// Translation without a default-language original
    Free,
    /// Translation aligned to an existing default-language original
    Connected,
}
