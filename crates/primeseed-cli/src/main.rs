//! Primeseed CLI - Command-line interface for seed prime search.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "primeseed")]
#[command(author, version, about = "Primeseed - seed prime search and verification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new primeseed project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Search a range for seed primes, with checkpointed resumability
    Scan {
        /// Upper bound of the search range
        #[arg(short, long)]
        limit: Option<u64>,

        /// Candidates between checkpoints (default: chosen from the limit)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Regenerate the primes from the canonical seeds and verify coverage
    Verify {
        /// Upper bound of the verification range
        #[arg(short, long)]
        limit: Option<u64>,
    },

    /// Analyze the gaps between the canonical seeds
    Gaps,

    /// Show decomposition witnesses for the given numbers
    Decompose {
        /// Numbers to decompose
        numbers: Vec<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Scan { limit, interval } => commands::scan::run(limit, interval, cli.verbose),
        Commands::Verify { limit } => commands::verify::run(limit, cli.verbose),
        Commands::Gaps => commands::gaps::run(),
        Commands::Decompose { numbers } => commands::decompose::run(&numbers),
    }
}
