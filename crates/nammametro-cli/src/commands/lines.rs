use anyhow::Result;

use nammametro_lib::Metro;

use crate::output::{render_lines, OutputFormat};

/// Print line labels with their station counts.
pub fn handle_lines_command(metro: &Metro, format: OutputFormat) -> Result<()> {
    print!("{}", render_lines(&metro.line_summaries(), format)?);
    Ok(())
}
