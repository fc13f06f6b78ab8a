//! PheroMQ CLI - stigmergic demand-response simulation.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pheromq")]
#[command(author, version, about = "PheroMQ - Stigmergic demand-response simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demand-response simulation on the honeycomb-7 grid
    Run {
        /// Maximum number of rounds (default 20)
        #[arg(short, long)]
        rounds: Option<u64>,

        /// Aggregate offer target in kW (default 20)
        #[arg(short, long)]
        target: Option<f64>,

        /// Evaporation factor, in (0, 1) (default 0.82)
        #[arg(long)]
        evap: Option<f64>,

        /// Diffusion fraction, in [0, 1] (default 0.35)
        #[arg(long)]
        diff: Option<f64>,

        /// RNG seed for participant capacities (default 42)
        #[arg(short, long)]
        seed: Option<u64>,

        /// TOML config file (flags override file values)
        #[arg(short, long)]
        config: Option<String>,

        /// Write the run report as JSON to this path
        #[arg(short, long)]
        export: Option<String>,

        /// Suppress per-round snapshots, show a progress bar instead
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the reference honeycomb-7 adjacency
    Topology,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            rounds,
            target,
            evap,
            diff,
            seed,
            config,
            export,
            quiet,
        } => commands::run::run(commands::run::RunArgs {
            rounds,
            target,
            evap,
            diff,
            seed,
            config,
            export,
            quiet,
        }),
        Commands::Topology => commands::topology::run(),
    }
}
