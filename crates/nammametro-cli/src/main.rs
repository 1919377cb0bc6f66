use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use nammametro_cli::commands::autocomplete::handle_autocomplete_command;
use nammametro_cli::commands::lines::handle_lines_command;
use nammametro_cli::commands::load_metro;
use nammametro_cli::commands::route::{handle_route_command, RouteCommandArgs};
use nammametro_cli::commands::stations::handle_stations_command;
use nammametro_cli::output::OutputFormat;
use nammametro_lib::config::MAX_ALTERNATES;
use nammametro_lib::MetroConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Namma Metro route finder")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// JSON file with line definitions. Falls back to NAMMA_METRO_LINES, then
    /// the built-in network.
    #[arg(long, global = true, value_name = "PATH")]
    lines: Option<PathBuf>,

    /// Treat stations marked as planned as if they did not exist.
    #[arg(long, global = true)]
    exclude_planned: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan the fewest-stop route between two stations.
    Route {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
        /// Number of alternate routes to propose.
        #[arg(
            long,
            value_parser = clap::value_parser!(u64).range(0..=MAX_ALTERNATES as u64)
        )]
        alternates: Option<u64>,
    },
    /// List every station with the lines serving it.
    Stations,
    /// List stations whose names start with a prefix.
    Autocomplete {
        /// Prefix to match, case and punctuation insensitive.
        prefix: String,
    },
    /// List line labels with their station counts.
    Lines,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = MetroConfig::default();
    if let Command::Route {
        alternates: Some(count),
        ..
    } = &cli.command
    {
        config.max_alternates = usize::try_from(*count).unwrap_or(MAX_ALTERNATES);
    }

    let metro = load_metro(
        cli.global.lines.as_deref(),
        !cli.global.exclude_planned,
        config,
    )?;
    let format = cli.global.format;

    match cli.command {
        Command::Route { from, to, .. } => {
            handle_route_command(&metro, &RouteCommandArgs { from, to }, format)
        }
        Command::Stations => handle_stations_command(&metro, format),
        Command::Autocomplete { prefix } => handle_autocomplete_command(&metro, &prefix, format),
        Command::Lines => handle_lines_command(&metro, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
