//! Store DevTools CLI Binary
//!
//! Loads devtools settings, normalizes the options and prints the resulting
//! configuration.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use store_devtools::logging::{init_logging, LoggingConfig};
use store_devtools::options::{DevtoolsSettings, OptionsLoader};
use store_devtools::{create_config, PartialOptions, StoreDevtoolsConfig};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Toml,
}

#[derive(Debug, Parser)]
#[command(name = "store-devtools", version, about = "Print the normalized store devtools configuration")]
struct Cli {
    /// Workspace root used to find config/devtools.toml
    #[arg(long, default_value = ".")]
    workspace: PathBuf,

    /// Read settings from this file only (skips global, workspace and environment layers)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force log-only mode
    #[arg(long)]
    log_only: bool,

    /// Validate the normalized configuration and fail if it is invalid
    #[arg(long)]
    validate: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the log level
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging before the real load so that loader events are recorded.
    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Store devtools CLI starting");

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    match run(&cli, settings) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn load_settings(cli: &Cli) -> Result<DevtoolsSettings> {
    match &cli.config {
        Some(path) => OptionsLoader::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => OptionsLoader::load(&cli.workspace).with_context(|| {
            format!(
                "Failed to load settings for workspace {}",
                cli.workspace.display()
            )
        }),
    }
}

/// Build logging configuration from CLI args and the settings file.
/// Precedence: CLI flags override the settings file, which overrides defaults.
/// Load failures are ignored here and reported by the real load.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = load_settings(cli)
        .ok()
        .map(|settings| settings.logging)
        .unwrap_or_default();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    config
}

fn run(cli: &Cli, settings: DevtoolsSettings) -> Result<String> {
    let mut options = settings.options;
    if cli.log_only {
        options = options.overlay(PartialOptions {
            log_only: Some(true),
            ..Default::default()
        });
    }

    let config = create_config(options);
    info!(name = %config.name, "Devtools configuration ready");

    if cli.validate {
        if let Err(errors) = config.validate() {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::bail!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            );
        }
    }

    render(&config, cli.format, cli.compact)
}

fn render(config: &StoreDevtoolsConfig, format: OutputFormat, compact: bool) -> Result<String> {
    let output = match format {
        OutputFormat::Json => config.to_json(!compact)?,
        OutputFormat::Toml => config.to_toml()?,
    };
    Ok(output)
}
