use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chess_path",
    version,
    about = "Validate bishop, rook and queen moves on an 8x8 board"
)]
pub struct Cli {
    /// YAML config file (falls back to $CHESS_PATH_CONFIG).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Placement string overriding the configured position.
    #[arg(long, global = true)]
    pub placement: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one move, e.g. `check c3 e1`.
    Check { from: String, to: String },
    /// Validate and perform one move, then print the board.
    Apply { from: String, to: String },
    /// Print the board.
    Render,
    /// Run the acceptance cases against the scenario position.
    Scenario,
    /// Validate random moves and print a tally.
    Probe {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        count: Option<usize>,
    },
}
