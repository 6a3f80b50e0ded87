//! CLI entry point for the sliding-tile solver.
//!
//! Usage:
//!   npuzzle-solver solve <puzzle.json> [options]
//!   npuzzle-solver solve --stdin [options]
//!
//! The input is a JSON document with the row-major tile layout and an
//! optional goal position for the blank:
//!
//!   { "tiles": [1, 2, 3, 4, 0, 6, 7, 5, 8], "blankGoalIndex": 8 }
//!
//! Options:
//!   --timeout <seconds>        Maximum search time (unlimited by default)
//!   --max-bound <n>            Maximum score bound to try
//!   --skip-solvability-check   Skip the parity-based pre-search guard

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use npuzzle_solver::{solve, Board, Direction, GoalBoard, SolverConfig, SolverResult};

#[derive(Parser)]
#[command(name = "npuzzle-solver")]
#[command(about = "Bounded iterative-deepening solver for sliding-tile puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find an optimal move sequence for a scrambled board
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Maximum search time in seconds (unlimited when absent)
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum score bound to try before giving up (unlimited when absent)
        #[arg(long)]
        max_bound: Option<u32>,

        /// Skip the parity-based solvability check
        #[arg(long)]
        skip_solvability_check: bool,
    },
}

/// Input format for a puzzle instance
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PuzzleInput {
    /// Row-major tile layout, 0 for the blank
    tiles: Vec<u8>,
    /// Goal cell index of the blank; last cell when absent
    #[serde(default)]
    blank_goal_index: Option<usize>,
}

/// Output format for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<Direction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes_expanded: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds_tried: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_bound: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_elapsed_ms: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            timeout,
            max_bound,
            skip_solvability_check,
        } => {
            // Read puzzle JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse puzzle
            let input: PuzzleInput = match serde_json::from_str(&json_content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing puzzle JSON: {}", e);
                    std::process::exit(1);
                }
            };

            // Decode board and goal
            let initial = match Board::from_layout(&input.tiles) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("Error decoding board: {}", e);
                    std::process::exit(1);
                }
            };
            let goal = match GoalBoard::standard(initial.tile_count(), input.blank_goal_index) {
                Ok(g) => g,
                Err(e) => {
                    eprintln!("Error building goal board: {}", e);
                    std::process::exit(1);
                }
            };

            let config = SolverConfig {
                check_solvability: !skip_solvability_check,
                timeout: timeout.map(Duration::from_secs),
                max_bound,
            };

            // Run solver
            let output = match solve(&initial, &goal, &config) {
                Ok(result) => format_result(result),
                Err(e) => SolveOutput {
                    solved: false,
                    cost: None,
                    moves: None,
                    reason: Some(e.to_string()),
                    nodes_expanded: None,
                    bounds_tried: None,
                    final_bound: None,
                    time_elapsed_ms: None,
                },
            };

            let solved = output.solved;
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn format_result(result: SolverResult) -> SolveOutput {
    SolveOutput {
        solved: true,
        cost: Some(result.cost),
        moves: Some(result.moves),
        reason: None,
        nodes_expanded: Some(result.nodes_expanded),
        bounds_tried: Some(result.bounds_tried),
        final_bound: Some(result.final_bound),
        time_elapsed_ms: Some(result.time_elapsed_ms),
    }
}
