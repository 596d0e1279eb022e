//! VADS docs CLI.
//!
//! Command-line interface for listing VA design system components and
//! generating usage examples from a Stencil declaration file.
//!
//! # Examples
//!
//! ```bash
//! # List components
//! vads-docs components dist/types/components.d.ts
//!
//! # Generate examples for one component
//! vads-docs examples dist/types/components.d.ts text-input --type basic
//! ```

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use vads_docs_cli::cli::Cli;
use vads_docs_cli::commands::config::{load_config, resolve_config_path};
use vads_docs_cli::runner::{execute_command, exit_code_for, init_logging};
use vads_docs_core::cli::{ExitCode, OutputFormat};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&config_path)?;

    init_logging(cli.verbose, &config.general.log_level)?;

    let output_format = match cli.format.as_deref() {
        Some(format) => format.parse::<OutputFormat>()?,
        None => config.default_format()?,
    };

    execute_command(cli.command, output_format, &config, &config_path).await
}
