//! Command execution and runtime logic.
//!
//! Contains the main command dispatch and logging initialization.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vads_docs::GenerateOptions;
use vads_docs_core::Error;
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::config::Config;

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` wins over the
/// configured `log_level`. Logs go to stderr so stdout stays parseable.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, log_level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub async fn execute_command(
    command: Commands,
    output_format: OutputFormat,
    config: &Config,
    config_path: &Path,
) -> Result<ExitCode> {
    let parser_config = &config.parser;

    match command {
        Commands::Components { file, status } => {
            commands::components::run(&file, status, parser_config, output_format).await
        }
        Commands::Find { file, name } => {
            commands::find::run(&file, &name, parser_config, output_format).await
        }
        Commands::Suggest { file, name } => {
            commands::suggest::run(&file, &name, parser_config, output_format).await
        }
        Commands::Analyze { file, name } => {
            commands::analyze::run(&file, &name, parser_config, output_format).await
        }
        Commands::Examples {
            file,
            name,
            types,
            framework,
            no_description,
        } => {
            let options = GenerateOptions {
                framework,
                include_description: !no_description,
                example_types: types,
            };
            commands::examples::run(&file, &name, &options, parser_config, output_format).await
        }
        Commands::Config { action } => {
            commands::config::run(action, config, config_path, output_format).await
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}

/// Maps a failed command to its exit status.
///
/// The first pipeline [`Error`] in the cause chain decides; anything else,
/// such as an unreadable file, is [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
