//! Command-line interface for `keypad-calc`

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::CalculatorConfig;
use crate::core::{Calculator, DivisionPolicy, Readout};
use crate::error::AppResult;

/// Keypad calculator: click buttons in the terminal, or replay presses in batch
#[derive(Parser, Debug)]
#[command(name = "keypad-calc", version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject division by zero instead of showing 0
    #[arg(long)]
    pub strict_division: bool,

    /// Replay whitespace-separated button labels and print the readout
    #[arg(short, long, value_name = "KEYS", allow_hyphen_values = true)]
    pub press: Option<String>,

    /// Output format for batch mode
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Batch-mode output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Preview line (if any) followed by the value
    #[default]
    Text,
    /// The readout as a JSON object
    Json,
}

impl Cli {
    /// Loads the configuration file, if any, and applies flag overrides
    pub fn resolve_config(&self) -> AppResult<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if self.strict_division {
            config = config.with_division_policy(DivisionPolicy::Error);
        }
        Ok(config)
    }

    /// Returns the tracing filter implied by `-v` or the configuration
    #[must_use]
    pub fn log_filter(&self, config: &CalculatorConfig) -> String {
        match self.verbose {
            0 => config.log_level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }

    /// Returns true when running headless
    #[must_use]
    pub fn is_batch(&self) -> bool {
        self.press.is_some()
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. The terminal UI owns stdout, so without a log
/// file its logs are discarded; batch mode logs to stderr.
pub fn init_tracing(cli: &Cli, config: &CalculatorConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter(config)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if cli.is_batch() => builder.with_writer(std::io::stderr).init(),
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

/// Replays `keys` on a fresh calculator and formats the final readout
pub fn run_batch(keys: &str, config: &CalculatorConfig, format: OutputFormat) -> AppResult<String> {
    let mut calculator = Calculator::from_config(config);
    calculator.on_render(|readout| debug!(value = %readout.value, "render"));
    let readout = calculator.press_sequence(keys)?;
    render_output(readout, format)
}

fn render_output(readout: &Readout, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(readout.lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(readout)?),
    }
}
