use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roomtrack_cli::output::OutputFormat;

mod commands;

use commands::network::handle_network_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Walking directions inside a building complex")]
struct Cli {
    /// Dataset file (`.json` or SQLite). Defaults to the platform data directory.
    #[arg(long, global = true, env = "ROOMTRACK_DATA")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan the shortest walk from a position to a location or group alias.
    Route {
        /// Destination location or group name.
        #[arg(long)]
        target: String,
        /// Current latitude.
        #[arg(long, allow_hyphen_values = true)]
        lat: Decimal,
        /// Current longitude.
        #[arg(long, allow_hyphen_values = true)]
        lng: Decimal,
        /// Current altitude.
        #[arg(long, allow_hyphen_values = true)]
        alt: Decimal,
    },
    /// Print every walkable segment as a polyline.
    Network,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            target,
            lat,
            lng,
            alt,
        } => {
            let args = RouteCommandArgs {
                target,
                lat,
                lng,
                alt,
                format: cli.format,
            };
            handle_route_command(cli.data.as_deref(), &args)
        }
        Command::Network => handle_network_command(cli.data.as_deref(), cli.format),
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
