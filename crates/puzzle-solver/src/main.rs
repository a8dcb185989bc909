//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver solve <puzzle.json> [options]
//!   puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --strategy <s>   depth-first | breadth-first (default: breadth-first)
//!   --format <f>     text | json (default: text)
//!   --verbose        Log search progress (RUST_LOG overrides)
//!
//! Exit status is 0 when a solution was found, 1 when the search was
//! exhausted without one, and 2 when the puzzle could not be loaded.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};

use puzzle_solver::{load_puzzle, LoadedPuzzle, PuzzleDefinition, Strategy};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first solver for combinatorial puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a path from the puzzle's initial state to a solved state
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Traversal order
        #[arg(long, value_enum, default_value_t = Strategy::BreadthFirst)]
        strategy: Strategy,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Log search progress
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Move-by-move trace followed by a summary line
    Text,
    /// Pretty-printed JSON report
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            format,
            verbose,
        } => {
            init_logging(verbose);
            match run_solve(file, stdin, strategy, format) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::from(1),
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    ExitCode::from(2)
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_puzzle(file: Option<PathBuf>, stdin: bool) -> Result<LoadedPuzzle> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        let definition = PuzzleDefinition::from_json(&buffer)?;
        Ok(definition.build(None)?)
    } else if let Some(path) = file {
        load_puzzle(&path).with_context(|| format!("failed to load puzzle {}", path.display()))
    } else {
        bail!("must provide either a file path or --stdin")
    }
}

fn run_solve(
    file: Option<PathBuf>,
    stdin: bool,
    strategy: Strategy,
    format: OutputFormat,
) -> Result<bool> {
    let puzzle = read_puzzle(file, stdin)?;
    info!("solving {} puzzle with {strategy} search", puzzle.kind());

    let report = puzzle.solve(strategy);
    debug!("search stats: {:?}", report.stats);

    match format {
        OutputFormat::Text => {
            if let Some(trace) = &report.trace {
                print!("{trace}");
            }
            println!("{}", report.summary());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(report.solved)
}
