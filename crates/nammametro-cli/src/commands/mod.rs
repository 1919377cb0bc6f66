//! Handlers for CLI subcommands.
//!
//! Each module handles one subcommand; `main.rs` parses arguments, builds the
//! [`Metro`] once, and dispatches here.

pub mod autocomplete;
pub mod lines;
pub mod route;
pub mod stations;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use nammametro_lib::{resolve_lines, Metro, MetroConfig};

/// Load line definitions and build the network every command queries.
///
/// `lines_path` overrides the `NAMMA_METRO_LINES` environment variable, which
/// in turn overrides the built-in network.
pub fn load_metro(
    lines_path: Option<&Path>,
    include_planned: bool,
    config: MetroConfig,
) -> Result<Metro> {
    let lines = resolve_lines(lines_path).context("failed to load line definitions")?;
    let metro = Metro::new(lines, include_planned, config);
    debug!(
        stations = metro.network().station_count(),
        lines = metro.network().line_labels().len(),
        include_planned,
        "network ready"
    );
    Ok(metro)
}
