//! Suggest command implementation.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use vads_docs_core::ParserConfig;
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::commands::common::{load_components, print_output};

/// Ranked names similar to a query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Suggestions {
    /// Name as the user typed it
    pub query: String,
    /// Similar component names, best first
    pub suggestions: Vec<String>,
}

/// Runs the suggest command.
///
/// An empty suggestion list is still a successful run.
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

    let result = Suggestions {
        query: name.to_string(),
        suggestions: parser.get_suggested_component_names(name, &components),
    };

    info!("{} suggestions for '{}'", result.suggestions.len(), name);
    print_output(&result, output_format)?;

    Ok(ExitCode::SUCCESS)
}
