//! quill - marketing copy generation from the terminal
//!
//! Thin binary over `quill-core`: parses arguments, sets up logging and
//! configuration, then hands off to the command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use quill_core::cli::commands;
use quill_core::cli::{Cli, Commands};
use quill_core::config::{ConfigManager, load_dotenv};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    load_dotenv();

    let workspace = match &args.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let mut manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };
    args.apply_overrides(manager.config_mut());
    tracing::debug!(
        config = ?manager.config_path(),
        model = %manager.config().provider.model,
        "configuration loaded"
    );

    match &args.command {
        Commands::Generate {
            request,
            show_prompt,
            json,
        } => {
            let request = request.to_request()?;
            commands::handle_generate(manager.config(), &request, *show_prompt, *json).await
        }
        Commands::Prompt { request } => commands::handle_prompt(&request.to_request()?),
        Commands::Types => commands::handle_types(),
        Commands::Init { force } => commands::handle_init(&workspace, *force),
        Commands::Config => commands::handle_config(&manager),
    }
}
