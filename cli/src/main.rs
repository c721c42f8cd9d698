//! cppdep CLI - analyzes C/C++ translation units for their `#include`
//! dependencies under a given macro environment.
//!
//! This is the main entry point. It uses clap for argument parsing and
//! dispatches to the analyze command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::analyze::{run_analyze, AnalyzeArgs};
use commands::common::OutputFormat as CommonOutputFormat;
use config::Config;
use cppdep_drv::OutputFormat as DrvOutputFormat;
use error::{CliError, Result};

/// cppdep - dependency analysis for C/C++ translation units
#[derive(Parser, Debug)]
#[command(name = "cppdep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyzes #include dependencies without compiling", long_about = None)]
struct Cli {
    /// Files, directories, or glob patterns naming translation units.
    /// Falls back to the config file's `inputs` list if omitted.
    inputs: Vec<String>,

    /// Seed a macro before analysis, repeatable (`-D FOO` or `-D FOO=1`).
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    defines: Vec<String>,

    /// Output format.
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging.
    #[arg(short, long, global = true, env = "CPPDEP_VERBOSE")]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CPPDEP_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output.
    #[arg(long, global = true, env = "CPPDEP_NO_COLOR")]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let format = resolve_format(&cli.format, &config)?;

    let mut defines = config.defines.clone();
    defines.extend(cli.defines.clone());

    let inputs = if cli.inputs.is_empty() {
        config.inputs.clone()
    } else {
        cli.inputs.clone()
    };

    let args = AnalyzeArgs {
        inputs,
        defines,
        format,
        verbose: cli.verbose || config.verbose,
    };

    run_analyze(args).map_err(anyhow::Error::from)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Resolves the effective output format, CLI flag taking priority over config.
fn resolve_format(flag: &str, config: &Config) -> Result<DrvOutputFormat> {
    let raw = if flag.is_empty() { &config.format } else { flag };
    match CommonOutputFormat::from_str(raw) {
        Some(CommonOutputFormat::Text) => Ok(DrvOutputFormat::Text),
        Some(CommonOutputFormat::Json) => Ok(DrvOutputFormat::Json),
        None => Err(CliError::Validation(format!(
            "unknown output format: {raw}"
        ))),
    }
}
