use anyhow::Result;

use nammametro_lib::Metro;

use crate::output::{render_stations, OutputFormat};

/// Print the station inventory in id order.
pub fn handle_stations_command(metro: &Metro, format: OutputFormat) -> Result<()> {
    let stations = metro.list_stations(metro.include_planned());
    print!("{}", render_stations(&stations, format)?);
    Ok(())
}
