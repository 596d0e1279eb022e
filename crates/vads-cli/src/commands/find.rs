//! Find command implementation.
//!
//! Prints the full metadata of one component, or suggestions when the name
//! has no match.

use anyhow::Result;
use std::path::Path;
use tracing::info;
use vads_docs_core::ParserConfig;
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::commands::common::{load_components, print_output, report_not_found};

/// Runs the find command.
///
/// Exits with [`ExitCode::NOT_FOUND`] when no component matches `name`.
///
/// # Errors
///
/// Returns an error if the declaration file cannot be loaded or the output
/// cannot be formatted.
pub async fn run(
    file: &Path,
    name: &str,
    parser_config: &ParserConfig,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let (parser, components) = load_components(file, parser_config).await?;

    let Some(component) = parser.find_component_by_name(name, &components) else {
        return report_not_found(&parser, &components, name, output_format);
    };

    info!("Found component '{}' for '{}'", component.name, name);
    print_output(component, output_format)?;

    Ok(ExitCode::SUCCESS)
}
