use std::path::PathBuf;

use clap::{Parser, Subcommand};
use replan_core::BlockFile;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "replan", version, about = "Replan CLI")]
struct Cli {
    /// Block file to use instead of ~/.config/replan/blocks.json
    #[arg(long, global = true)]
    blocks: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replan the day or check for drift
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Block management
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// Weekly time-budget checks
    Feasibility {
        #[command(subcommand)]
        action: commands::feasibility::FeasibilityAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = match cli.blocks {
        Some(path) => BlockFile::at(path),
        None => BlockFile::open_default()?,
    };
    tracing::debug!(path = %store.path().display(), "using block file");

    match cli.command {
        Commands::Plan { action } => commands::plan::run(action, &store),
        Commands::Block { action } => commands::block::run(action, &store),
        Commands::Feasibility { action } => commands::feasibility::run(action),
        Commands::Config { action } => commands::config::run(action),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
