mod cli;
mod config;
mod error;
mod logger;
mod models;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::models::OptionKind;

#[derive(Parser)]
#[command(name = "bikelog")]
#[command(about = "Log bike rides to CSV files organized by year", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a ride
    Log {
        /// Path to config file
        #[arg(short, long, env = "BIKELOG_CONFIG")]
        config: Option<PathBuf>,

        /// Date of the ride, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Rider name (see list-riders)
        #[arg(long)]
        rider: Option<String>,

        /// Bike used for the ride (see list-bikes)
        #[arg(long)]
        bike: Option<String>,

        /// Distance of the ride in miles
        #[arg(long)]
        distance: Option<String>,

        /// Use riders and bikes missing from the lists without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// List available rider options
    ListRiders {
        /// Path to config file
        #[arg(short, long, env = "BIKELOG_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List available bike options
    ListBikes {
        /// Path to config file
        #[arg(short, long, env = "BIKELOG_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize bikelog.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    // RUST_LOG=bikelog=debug shows what each run reads and writes
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bikelog=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Log {
            config,
            date,
            rider,
            bike,
            distance,
            yes,
        } => cli::log::run(config, date, rider, bike, distance, yes),
        Commands::ListRiders { config } => cli::list::run(config, OptionKind::Rider),
        Commands::ListBikes { config } => cli::list::run(config, OptionKind::Bike),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
