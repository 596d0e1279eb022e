//! Analyze command implementation.
//!
//! Shows how a component's properties were classified, the purpose and
//! content strategy inferred from them, and any parent/child structure.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use vads_docs::{ComponentData, ComponentParser, ComponentStatus, CompositeInfo, SemanticAnalysis};
use vads_docs_codegen::synthesis::detect_composite_component;
use vads_docs_core::ParserConfig;
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::commands::common::{load_components, print_output, report_not_found};

/// Analysis of one component.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Display name
    pub name: String,
    /// Custom element tag
    pub tag_name: String,
    /// Derived status
    pub status: ComponentStatus,
    /// Guidance derived from the status
    pub recommendation: String,
    /// Property classification and inferred purpose
    pub analysis: SemanticAnalysis,
    /// Parent/child structure, for composite components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeInfo>,
}

/// Analyzes `component` with `parser`.
#[must_use]
pub fn analyze(parser: &ComponentParser, component: &ComponentData) -> AnalysisReport {
    let analysis = parser.analyze_component(component);
    let composite = detect_composite_component(&component.tag_name, &analysis);

    AnalysisReport {
        name: component.name.clone(),
        tag_name: component.tag_name.clone(),
        status: component.status,
        recommendation: component.recommendation.clone(),
        analysis,
        composite,
    }
}

/// Runs the analyze command.
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

    let report = analyze(&parser, component);
    info!(
        "Analyzed '{}': purpose {}, strategy {}",
        report.name, report.analysis.inferred_purpose, report.analysis.content_strategy
    );
    print_output(&report, output_format)?;

    Ok(ExitCode::SUCCESS)
}
