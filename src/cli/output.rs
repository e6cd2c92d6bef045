//! CLI output: error mapping to the CLI surface.

/// Render an error with its context chain on one line.
pub fn map_error(e: &anyhow::Error) -> String {
    format!("{:#}", e)
}
