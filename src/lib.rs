//! canvas-grade-report library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: Canvas client, fetch/filter core, PDF export.

pub mod canvas;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{ApiConfig, Config};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Report) => cli::commands::report::handle(cli, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Build the configuration once: environment for the API, settings file and
/// flags for the report.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    Ok(Config {
        api: ApiConfig::from_env()?,
        report: cli.report_settings()?,
    })
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // a missing .env is fine, the variables may already be exported
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    dispatch(&cli, &cfg)
}
