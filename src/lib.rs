//! Container Resolver: Workspace- and Language-Aware Container Trees
//!
//! Resolves a container content element and its children from a versioned,
//! multi-language record store into a tree of children grouped by column.
//! The record store and the container type registry are supplied by the caller.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod store;
pub mod tree;

pub use context::{ExecutionMode, LanguageContext, TranslationMode, WorkspaceContext};
pub use error::{ConfigError, ResolveError};
pub use record::Record;
pub use registry::{ContainerRegistry, TypeRegistry};
pub use resolve::ContainerResolver;
pub use store::{InMemoryRecordStore, RecordStore};
pub use tree::ContainerTree;
