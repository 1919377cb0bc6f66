//! Output formatting for command results.
//!
//! Route reports already know how to render themselves; this module picks the
//! rendering for the selected [`OutputFormat`] and formats the listing
//! commands the same way.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use nammametro_lib::{LineSummary, RouteRenderMode, RouteReport, StationListing};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Full human-readable breakdown.
    #[default]
    Text,
    /// Station list with a one-line summary.
    Basic,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::PlainText),
            OutputFormat::Basic => Some(RouteRenderMode::Basic),
            OutputFormat::Json => None,
        }
    }
}

/// JSON envelope for autocomplete results.
#[derive(Debug, Serialize)]
struct AutocompleteResponse<'a> {
    prefix: &'a str,
    matches: &'a [String],
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

pub fn render_route(report: &RouteReport, format: OutputFormat) -> Result<String> {
    match format.render_mode() {
        Some(mode) => Ok(report.render(mode)),
        None => to_json(report),
    }
}

pub fn render_stations(stations: &[StationListing], format: OutputFormat) -> Result<String> {
    let mut buffer = String::new();
    match format {
        OutputFormat::Json => return to_json(stations),
        OutputFormat::Basic => {
            for station in stations {
                let _ = writeln!(buffer, "{}", station.name);
            }
        }
        OutputFormat::Text => {
            for station in stations {
                let planned = if station.planned { " (planned)" } else { "" };
                let _ = writeln!(
                    buffer,
                    "{} [{}]{}",
                    station.name,
                    station.lines.join(", "),
                    planned
                );
            }
            let _ = writeln!(buffer, "\n{} stations", stations.len());
        }
    }
    Ok(buffer)
}

pub fn render_autocomplete(prefix: &str, matches: &[String], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&AutocompleteResponse { prefix, matches });
    }

    let mut buffer = String::new();
    if matches.is_empty() && format == OutputFormat::Text {
        let _ = writeln!(buffer, "No stations match '{}'", prefix);
    }
    for name in matches {
        let _ = writeln!(buffer, "{}", name);
    }
    Ok(buffer)
}

pub fn render_lines(lines: &[LineSummary], format: OutputFormat) -> Result<String> {
    let mut buffer = String::new();
    match format {
        OutputFormat::Json => return to_json(lines),
        OutputFormat::Basic => {
            for line in lines {
                let _ = writeln!(buffer, "{}", line.label);
            }
        }
        OutputFormat::Text => {
            for line in lines {
                let _ = writeln!(buffer, "{}: {} stations", line.label, line.stations);
            }
        }
    }
    Ok(buffer)
}
