//! Common utilities shared across CLI commands.
//!
//! Loads a declaration file into a component registry and prints results in
//! the requested output format.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};
use vads_docs::{ComponentParser, ComponentParserFactory, ComponentRegistry};
use vads_docs_core::{Error, ParserConfig};
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::formatters::format_output;

/// Reads and parses a declaration file.
///
/// Returns the parser alongside the registry so the caller can run lookups
/// and generation with the same configuration.
///
/// # Errors
///
/// Returns an error if the parser configuration is invalid, the file cannot
/// be read, or the file exceeds `max_input_bytes`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vads_docs_cli::commands::common::load_components;
/// use vads_docs_core::ParserConfig;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let (_parser, components) =
///     load_components(Path::new("components.d.ts"), &ParserConfig::default()).await?;
/// println!("{} components", components.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_components(
    file: &Path,
    config: &ParserConfig,
) -> Result<(ComponentParser, ComponentRegistry)> {
    let parser = ComponentParserFactory::with_config(config.clone())
        .context("invalid parser configuration")?;

    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read declaration file {}", file.display()))?;
    debug!("Read {} bytes from {}", text.len(), file.display());

    if text.len() > config.max_input_bytes {
        return Err(Error::ValidationError {
            field: "declaration_file".to_string(),
            reason: format!(
                "input is {} bytes, limit is {} bytes",
                text.len(),
                config.max_input_bytes
            ),
        })
        .with_context(|| format!("refusing to parse declaration file {}", file.display()));
    }

    let components = parser.parse_component_metadata(&text);

    Ok((parser, components))
}

/// Formats `data` and writes it to stdout.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn print_output<T: Serialize>(data: &T, output_format: OutputFormat) -> Result<()> {
    let formatted = format_output(data, output_format).context("failed to format output")?;
    println!("{formatted}");
    Ok(())
}

/// Report printed when a component name has no match.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NotFound {
    /// Name as the user typed it
    pub query: String,
    /// Status message
    pub message: String,
    /// Similar component names, best first
    pub suggestions: Vec<String>,
}

impl NotFound {
    /// Builds the report, ranking suggestions with `parser`.
    #[must_use]
    pub fn new(parser: &ComponentParser, components: &ComponentRegistry, query: &str) -> Self {
        let suggestions = parser.get_suggested_component_names(query, components);
        let message = if suggestions.is_empty() {
            format!("component '{query}' not found")
        } else {
            format!("component '{query}' not found, did you mean one of these?")
        };

        Self {
            query: query.to_string(),
            message,
            suggestions,
        }
    }
}

/// Prints a [`NotFound`] report and returns [`ExitCode::NOT_FOUND`].
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn report_not_found(
    parser: &ComponentParser,
    components: &ComponentRegistry,
    query: &str,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let report = NotFound::new(parser, components, query);
    info!(
        "No component matches '{}' ({} suggestions)",
        query,
        report.suggestions.len()
    );
    print_output(&report, output_format)?;
    Ok(ExitCode::NOT_FOUND)
}
