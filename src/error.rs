//! Error types for container resolution.

use crate::record::Uid;
use std::path::PathBuf;
use thiserror::Error;

/// Resolution errors
///
/// Absence of a default-language original, a child or a translation is not an
/// error; only the root lookup and its type check can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Cannot fetch record with uid {uid}")]
    NotFound { uid: Uid },

    #[error("Not a container element with uid {uid} (CType '{ctype}')")]
    NotContainer { uid: Uid, ctype: String },
}

impl ResolveError {
    /// Uid the failed resolution was requested for
    pub fn uid(&self) -> Uid {
        match self {
            ResolveError::NotFound { uid } => *uid,
            ResolveError::NotContainer { uid, .. } => *uid,
        }
    }
}

/// Configuration, logging and fixture errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture {path:?}: {message}")]
    Fixture { path: PathBuf, message: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}
