//! Namma Metro CLI library.
//!
//! Subcommand handlers and output formatting for the `nammametro-cli` binary.

pub mod commands;
pub mod output;
