//! Shared fixtures for integration tests.

use std::io::Write;

use nammametro_lib::{LineDefinition, Metro, MetroConfig};
use tempfile::NamedTempFile;

/// Metro over the built-in network.
#[allow(dead_code)]
pub fn default_metro() -> Metro {
    Metro::with_default_lines()
}

/// Two lines forming a square: `a` runs A-B-C and `b` runs A-D-C.
#[allow(dead_code)]
pub fn square_metro() -> Metro {
    Metro::new(
        vec![
            LineDefinition::open("a", ["A", "B", "C"]),
            LineDefinition::open("b", ["A", "D", "C"]),
        ],
        true,
        MetroConfig::default(),
    )
}

/// Write `contents` to a temporary JSON file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_lines_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write lines");
    file.flush().expect("flush lines");
    file
}

/// Two lines with no shared station: `left` runs A-B and `right` runs C-D.
#[allow(dead_code)]
pub fn disconnected_metro() -> Metro {
    Metro::new(
        vec![
            LineDefinition::open("left", ["A", "B"]),
            LineDefinition::open("right", ["C", "D"]),
        ],
        true,
        MetroConfig::default(),
    )
}
