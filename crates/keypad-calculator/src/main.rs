//! `keypad-calc`: interactive terminal calculator and batch replayer

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use keypad_calculator::cli::{init_tracing, run_batch, Cli};
use keypad_calculator::error::AppResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&cli, &config)?;
    info!(policy = ?config.division_by_zero, batch = cli.is_batch(), "keypad-calc starting");

    if let Some(keys) = &cli.press {
        let output = run_batch(keys, &config, cli.format)?;
        println!("{output}");
        return Ok(());
    }

    run_interactive(&config)
}

#[cfg(feature = "tui")]
fn run_interactive(config: &keypad_calculator::config::CalculatorConfig) -> AppResult<()> {
    keypad_calculator::tui::run(config)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_config: &keypad_calculator::config::CalculatorConfig) -> AppResult<()> {
    Err(keypad_calculator::error::AppError::unsupported(
        "terminal UI not compiled in; use --press",
    ))
}
