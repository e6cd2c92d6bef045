//! CLI parse: clap types for container-resolver. No behavior; definitions only.

use crate::context::ExecutionMode;
use crate::record::{LanguageId, Uid, WorkspaceId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve container content elements into column trees
#[derive(Parser)]
#[command(name = "container-resolver")]
#[command(about = "Resolve container content elements across workspaces and languages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config/ is read from here)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a container from a record fixture
    Resolve {
        /// Uid of the container record
        uid: Uid,
        /// Record fixture (JSON, or TOML by extension)
        #[arg(long)]
        fixture: PathBuf,
        /// Execution mode (frontend/fe or backend/be); defaults to config
        #[arg(long)]
        mode: Option<ExecutionMode>,
        /// Target language id; defaults to config
        #[arg(long)]
        language: Option<LanguageId>,
        /// Do not fall back to default-language content
        #[arg(long)]
        no_overlays: bool,
        /// Workspace id (0 = live); defaults to config
        #[arg(long)]
        workspace_id: Option<WorkspaceId>,
        /// Additional container CTypes to register
        #[arg(long = "ctype")]
        ctypes: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List registered container types
    Containers,
    /// Validate configuration
    Validate,
}
