//! Examples command implementation.
//!
//! Generates usage examples for one component, keeping only the requested
//! example types and optionally dropping descriptions.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use vads_docs::{ComponentData, ComponentParser, Example, ExampleType, GenerateOptions};
use vads_docs_core::ParserConfig;
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::commands::common::{load_components, print_output, report_not_found};

/// One example as printed by the CLI.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExampleView {
    /// Short heading
    pub title: String,
    /// Explanation, unless `--no-description` was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Literal markup
    pub code: String,
    /// Language tag for the code
    pub framework: String,
    /// What the example demonstrates
    pub purpose: ExampleType,
}

impl ExampleView {
    fn new(example: Example, include_description: bool) -> Self {
        Self {
            title: example.title,
            description: include_description.then_some(example.description),
            code: example.code,
            framework: example.framework,
            purpose: example.purpose,
        }
    }
}

/// Examples generated for one component.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExamplesReport {
    /// Display name
    pub name: String,
    /// Custom element tag
    pub tag_name: String,
    /// Examples in generation order
    pub examples: Vec<ExampleView>,
}

/// Generates the examples `options` asks for.
#[must_use]
pub fn build_examples(
    parser: &ComponentParser,
    component: &ComponentData,
    options: &GenerateOptions,
) -> ExamplesReport {
    let examples = parser
        .generate_filtered_examples(component, options)
        .into_iter()
        .map(|example| ExampleView::new(example, options.include_description))
        .collect();

    ExamplesReport {
        name: component.name.clone(),
        tag_name: component.tag_name.clone(),
        examples,
    }
}

/// Runs the examples command.
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
    options: &GenerateOptions,
    parser_config: &ParserConfig,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let (parser, components) = load_components(file, parser_config).await?;

    let Some(component) = parser.find_component_by_name(name, &components) else {
        return report_not_found(&parser, &components, name, output_format);
    };

    let report = build_examples(&parser, component, options);
    info!(
        "Generated {} examples for '{}'",
        report.examples.len(),
        report.name
    );
    print_output(&report, output_format)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vads_docs::ComponentParserFactory;

    const BUTTON: &str = "/** @componentName Button\n * @maturityCategory use\n * @maturityLevel best_practice */\ninterface VaButton { text: string; disabled?: boolean; }";

    fn button_report(options: &GenerateOptions) -> ExamplesReport {
        let parser = ComponentParserFactory::create().unwrap();
        let components = parser.parse_component_metadata(BUTTON);
        build_examples(&parser, components.get("Button").unwrap(), options)
    }

    #[test]
    fn test_all_examples_with_descriptions() {
        let report = button_report(&GenerateOptions::default());

        assert_eq!(report.tag_name, "va-button");
        assert_eq!(report.examples[0].title, "Basic Usage");
        assert!(report.examples.iter().all(|e| e.description.is_some()));
        assert!(report.examples.iter().all(|e| e.framework == "html"));
    }

    #[test]
    fn test_filter_and_strip_descriptions() {
        let options = GenerateOptions {
            framework: "jsx".to_string(),
            include_description: false,
            example_types: vec![ExampleType::State],
        };
        let report = button_report(&options);

        assert_eq!(report.examples.len(), 1);
        assert_eq!(report.examples[0].purpose, ExampleType::State);
        assert_eq!(report.examples[0].framework, "jsx");
        assert_eq!(report.examples[0].description, None);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["examples"][0].get("description").is_none());
    }

    #[test]
    fn test_requested_type_not_applicable() {
        let options = GenerateOptions {
            example_types: vec![ExampleType::Form],
            ..GenerateOptions::default()
        };
        assert!(button_report(&options).examples.is_empty());
    }
}
