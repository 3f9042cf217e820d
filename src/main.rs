//! Command-line driver for the move validator.
//!
//! `cargo run -- check c3 e1`
//! `cargo run -- scenario`
//! `cargo run -- probe --seed 7 --count 500`

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{error, info};

use chess_path::config::{Config, CONFIG_PATH_ENV, LOG_LEVEL_ENV};
use chess_path::errors::BoardError;
use chess_path::game_state::board::Board;
use chess_path::game_state::chess_rules::{scenario_board, SCENARIO_CASES};
use chess_path::game_state::coordinate::Coordinate;
use chess_path::utils::move_probe::probe_board;
use chess_path::utils::placement_parser::parse_placement;
use chess_path::utils::render_board::render_board;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let cfg_path: Option<PathBuf> = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let cfg = match Config::load(cfg_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let env = Env::default().filter_or(LOG_LEVEL_ENV, cfg.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    match run(cli, &cfg) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_board(cli: &cli::Cli, cfg: &Config) -> Result<Board, BoardError> {
    match &cli.placement {
        Some(placement) => parse_placement(placement),
        None => cfg.board(),
    }
}

fn run(cli: cli::Cli, cfg: &Config) -> Result<bool, BoardError> {
    let Some(command) = &cli.command else {
        let _ = cli::Cli::command().print_help();
        return Ok(true);
    };

    match command {
        cli::Commands::Check { from, to } => {
            let board = load_board(&cli, cfg)?;
            let start: Coordinate = from.parse()?;
            let end: Coordinate = to.parse()?;
            let verdict = board.check_move(start, end);
            println!("{start}-{end}: {verdict}");
            Ok(verdict.is_legal())
        }
        cli::Commands::Apply { from, to } => {
            let mut board = load_board(&cli, cfg)?;
            let applied = board.apply_move(from.parse()?, to.parse()?)?;
            info!("applied {}-{}", applied.start, applied.end);
            println!("{}", render_board(&board));
            Ok(true)
        }
        cli::Commands::Render => {
            println!("{}", render_board(&load_board(&cli, cfg)?));
            Ok(true)
        }
        cli::Commands::Scenario => {
            let board = scenario_board()?;
            println!("{}", render_board(&board));
            let mut failures = 0usize;
            for case in SCENARIO_CASES {
                let passed = board.try_move_algebraic(case.start, case.end)? == case.expected;
                if !passed {
                    failures += 1;
                }
                println!(
                    "{}-{} {}: {}",
                    case.start,
                    case.end,
                    case.description,
                    if passed { "passed" } else { "FAILED" }
                );
            }
            info!("{} cases, {failures} failed", SCENARIO_CASES.len());
            Ok(failures == 0)
        }
        cli::Commands::Probe { seed, count } => {
            let board = load_board(&cli, cfg)?;
            let report = probe_board(
                &board,
                seed.unwrap_or(cfg.probe_seed),
                count.unwrap_or(cfg.probe_count),
            );
            println!("{}", report.report());
            Ok(true)
        }
    }
}
