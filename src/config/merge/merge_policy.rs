//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("context.mode", "backend")?
        .set_default("context.language_id", 0)?
        .set_default("context.perform_overlays", true)?
        .set_default("context.workspace_id", 0)
}
