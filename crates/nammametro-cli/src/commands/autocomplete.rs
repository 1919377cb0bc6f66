use anyhow::Result;

use nammametro_lib::Metro;

use crate::output::{render_autocomplete, OutputFormat};

/// Print station names starting with `prefix`.
pub fn handle_autocomplete_command(metro: &Metro, prefix: &str, format: OutputFormat) -> Result<()> {
    let matches = metro.autocomplete(prefix);
    print!("{}", render_autocomplete(prefix, &matches, format)?);
    Ok(())
}
