//! Components command implementation.
//!
//! Lists the documented components of a declaration file, optionally
//! filtered by status.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;
use vads_docs::{ComponentData, ComponentParser, ComponentRegistry, ComponentStatus};
use vads_docs_core::ParserConfig;
use vads_docs_core::cli::{ExitCode, OutputFormat};

use crate::commands::common::{load_components, print_output};

/// One line of the component listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Display name
    pub name: String,
    /// Custom element tag
    pub tag_name: String,
    /// Derived status
    pub status: ComponentStatus,
    /// Number of declared properties
    pub property_count: usize,
    /// Guidance link, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_href: Option<String>,
}

impl From<&ComponentData> for ComponentSummary {
    fn from(component: &ComponentData) -> Self {
        Self {
            name: component.name.clone(),
            tag_name: component.tag_name.clone(),
            status: component.status,
            property_count: component.properties.len(),
            guidance_href: component.guidance_href.clone(),
        }
    }
}

/// Component listing for one declaration file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentList {
    /// Declaration file path
    pub file: String,
    /// Number of listed components
    pub total: usize,
    /// Status filter that was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,
    /// Components in file order
    pub components: Vec<ComponentSummary>,
}

/// Builds the listing, keeping only `status` when given.
#[must_use]
pub fn list_components(
    parser: &ComponentParser,
    components: &ComponentRegistry,
    file: &Path,
    status: Option<ComponentStatus>,
) -> ComponentList {
    let summaries: Vec<ComponentSummary> = match status {
        Some(status) => parser
            .components_by_status(components, status)
            .into_iter()
            .map(ComponentSummary::from)
            .collect(),
        None => components.iter().map(ComponentSummary::from).collect(),
    };

    ComponentList {
        file: file.display().to_string(),
        total: summaries.len(),
        status,
        components: summaries,
    }
}

/// Runs the components command.
///
/// # Errors
///
/// Returns an error if the declaration file cannot be loaded or the output
/// cannot be formatted.
pub async fn run(
    file: &Path,
    status: Option<ComponentStatus>,
    parser_config: &ParserConfig,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let (parser, components) = load_components(file, parser_config).await?;
    let listing = list_components(&parser, &components, file, status);

    info!(
        "Listed {} of {} components from {}",
        listing.total,
        components.len(),
        file.display()
    );
    print_output(&listing, output_format)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vads_docs::ComponentParserFactory;

    const DECLARATIONS: &str = r#"
/**
 * @componentName Button
 * @maturityCategory use
 * @maturityLevel best_practice
 * @guidanceHref button
 */
interface VaButton {
  "text": string;
  "secondary"?: boolean;
}
/**
 * @componentName Link
 * @maturityCategory use
 * @maturityLevel deployed
 */
interface VaLink {
  "href": string;
}
"#;

    fn setup() -> (ComponentParser, ComponentRegistry) {
        let parser = ComponentParserFactory::create().unwrap();
        let components = parser.parse_component_metadata(DECLARATIONS);
        (parser, components)
    }

    #[test]
    fn test_list_all() {
        let (parser, components) = setup();
        let listing = list_components(&parser, &components, Path::new("c.d.ts"), None);

        assert_eq!(listing.total, 2);
        assert_eq!(listing.components[0].name, "Button");
        assert_eq!(listing.components[0].property_count, 2);
        assert_eq!(listing.components[0].guidance_href.as_deref(), Some("button"));
        assert_eq!(listing.components[1].tag_name, "va-link");
    }

    #[test]
    fn test_list_by_status() {
        let (parser, components) = setup();
        let listing = list_components(
            &parser,
            &components,
            Path::new("c.d.ts"),
            Some(ComponentStatus::Stable),
        );

        assert_eq!(listing.total, 1);
        assert_eq!(listing.components[0].name, "Link");
        assert_eq!(listing.status, Some(ComponentStatus::Stable));
    }

    #[test]
    fn test_listing_json_shape() {
        let (parser, components) = setup();
        let listing = list_components(&parser, &components, Path::new("c.d.ts"), None);
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["total"], 2);
        assert_eq!(json["components"][0]["status"], "RECOMMENDED");
        assert!(json.get("status").is_none());
        assert!(json["components"][1].get("guidance_href").is_none());
    }
}
