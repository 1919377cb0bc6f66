//! Route command handler for planning a trip between two stations.

use anyhow::Result;

use nammametro_lib::Metro;

use crate::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting station name, free text.
    pub from: String,
    /// Destination station name, free text.
    pub to: String,
}

/// Handle the route subcommand.
///
/// Unknown station names surface as errors carrying "did you mean"
/// suggestions.
pub fn handle_route_command(
    metro: &Metro,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let report = metro.plan_route(&args.from, &args.to)?;
    print!("{}", render_route(&report, format)?);
    Ok(())
}
