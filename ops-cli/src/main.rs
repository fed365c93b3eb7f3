use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use config_engine::{ClaimsDeskConfig, ConfigEngine};
use error_common::Language;
use logger_redacted::init_logging;
use serde::Serialize;
use tracing::{error, info};

use ops_cli::{commands, Cli, Command, Dataset, BINARY_NAME};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:#}", BINARY_NAME, e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}: {}", BINARY_NAME, e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}: {:#}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<ClaimsDeskConfig> {
    let mut engine = ConfigEngine::new();
    if let Some(path) = &cli.config {
        engine = engine.with_file(path);
    }

    let mut config = engine.load().context("Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    Ok(config)
}

async fn run(cli: Cli, config: ClaimsDeskConfig) -> Result<()> {
    let language = cli
        .lang
        .unwrap_or_else(|| Language::from_tag(&config.coverage.default_language));
    info!(version = env!("CARGO_PKG_VERSION"), %language, "Starting {}", BINARY_NAME);

    match &cli.command {
        Command::Price(args) => {
            let dataset = Dataset::load(&args.dataset)?;
            let result = commands::price(args, &dataset, &config, language).await?;
            print_json(&result)
        }
        Command::Coverage(args) => {
            let dataset = Dataset::load(&args.dataset)?;
            let result = commands::coverage(args, &dataset, &config, language).await?;
            print_json(&result)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}
