//! CLI domain: parse, route, output, and presentation only.
//! Resolution itself lives in `resolve`; the CLI wires a fixture store and the
//! configured registry into it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_containers_table, format_tree_json, format_tree_text};
pub use route::RunContext;
