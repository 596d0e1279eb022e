//! Component block extraction from declaration files.
//!
//! Pairs every component interface with the nearest `JSDoc` block that
//! precedes it and reads these tags from that block:
//! - `@componentName` - Display name (required)
//! - `@maturityCategory` - Governance category (required)
//! - `@maturityLevel` - Maturity level (required)
//! - `@guidanceHref` - Design-system guidance link
//! - `@translations` - Translation key (repeatable)
//!
//! # `JSDoc` Format
//!
//! ```typescript
//! /**
//!  * @componentName Button
//!  * @maturityCategory use
//!  * @maturityLevel best_practice
//!  * @guidanceHref button
//!  * @translations en
//!  */
//! interface VaButton {
//!   text: string;
//! }
//! ```
//!
//! The block that is textually last before an interface wins, even when it
//! was written for an earlier interface.

use crate::interface::parse_interface_properties;
use crate::status::{determine_component_status, recommendation_for};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};
use vads_docs_core::{
    ComponentBlock, ComponentData, ComponentRegistry, Error, MaturityCategory, MaturityLevel,
    ParserConfig, Result,
};

static JSDOC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*[\s\S]*?\*/").expect("valid regex"));
static COMPONENT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@componentName[ \t]+(.+)").expect("valid regex"));
static CATEGORY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@maturityCategory[ \t]+(\S+)").expect("valid regex"));
static LEVEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@maturityLevel[ \t]+(\S+)").expect("valid regex"));
static GUIDANCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@guidanceHref[ \t]+(\S+)").expect("valid regex"));
static TRANSLATIONS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@translations[ \t]+(\S+)").expect("valid regex"));

/// Extracts component blocks from declaration text.
///
/// Holds the interface-header pattern compiled for the configured prefix.
///
/// # Examples
///
/// ```
/// use vads_docs_core::ParserConfig;
/// use vads_docs_metadata::MetadataExtractor;
///
/// let text = r"
/// /**
///  * @componentName Button
///  * @maturityCategory use
///  * @maturityLevel best_practice
///  */
/// interface VaButton {
///   text: string;
/// }
/// ";
///
/// let extractor = MetadataExtractor::new(&ParserConfig::default())?;
/// let blocks = extractor.extract_component_blocks(text);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].tag_name, "va-button");
/// # Ok::<(), vads_docs_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    interface_regex: Regex,
    tag_prefix: String,
}

impl MetadataExtractor {
    /// Creates an extractor for the configured naming convention.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the configuration is invalid.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        config.validate()?;

        let pattern = format!(
            r"\binterface\s+({}\w+)[^{{;]*\{{",
            regex::escape(&config.interface_prefix)
        );
        let interface_regex = Regex::new(&pattern).map_err(|e| Error::ConfigError {
            message: format!("Invalid interface prefix pattern: {e}"),
        })?;

        Ok(Self {
            interface_regex,
            tag_prefix: config.tag_prefix.clone(),
        })
    }

    /// Yields one block per annotated component interface, in file order.
    ///
    /// Interfaces whose preceding comment lacks `@componentName`,
    /// `@maturityCategory` or `@maturityLevel` are skipped.
    #[must_use]
    pub fn extract_component_blocks(&self, text: &str) -> Vec<ComponentBlock> {
        let comments: Vec<regex::Match<'_>> = JSDOC_REGEX.find_iter(text).collect();
        let mut blocks = Vec::new();

        for captures in self.interface_regex.captures_iter(text) {
            let (Some(header), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let interface_name = name.as_str().to_string();
            let interface_body = interface_body(text, header.end());

            let Some(comment) = comments
                .iter()
                .take_while(|c| c.end() <= header.start())
                .last()
            else {
                debug!(interface = %interface_name, "no JSDoc block before interface, skipping");
                continue;
            };

            let Some(block) =
                self.block_from_comment(comment.as_str(), interface_name, interface_body)
            else {
                continue;
            };
            blocks.push(block);
        }

        blocks
    }

    /// Extracts blocks and converts them into a registry keyed by component name.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::{ComponentStatus, ParserConfig};
    /// use vads_docs_metadata::MetadataExtractor;
    ///
    /// let text = "/** @componentName Button\n * @maturityCategory use\n * @maturityLevel best_practice */\ninterface VaButton { text: string; disabled?: boolean; }";
    ///
    /// let extractor = MetadataExtractor::new(&ParserConfig::default())?;
    /// let registry = extractor.extract_components(text);
    /// let button = registry.get("Button").unwrap();
    /// assert_eq!(button.status, ComponentStatus::Recommended);
    /// # Ok::<(), vads_docs_core::Error>(())
    /// ```
    #[must_use]
    pub fn extract_components(&self, text: &str) -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();

        for block in self.extract_component_blocks(text) {
            let component = build_component_data(block);
            let name = component.name.clone();
            if registry.insert(component).is_some() {
                warn!(component = %name, "duplicate component name, later declaration wins");
            }
        }

        debug!(count = registry.len(), "parsed component metadata");
        registry
    }

    fn block_from_comment(
        &self,
        comment: &str,
        interface_name: String,
        interface_body: String,
    ) -> Option<ComponentBlock> {
        let Some(component_name) = tag_value(&COMPONENT_NAME_REGEX, comment) else {
            debug!(interface = %interface_name, "missing @componentName, skipping");
            return None;
        };
        let (Some(maturity_category), Some(maturity_level)) = (
            tag_value(&CATEGORY_REGEX, comment),
            tag_value(&LEVEL_REGEX, comment),
        ) else {
            debug!(
                interface = %interface_name,
                component = %component_name,
                "missing maturity metadata, skipping"
            );
            return None;
        };

        let guidance_href = tag_value(&GUIDANCE_REGEX, comment);
        let translations = TRANSLATIONS_REGEX
            .captures_iter(comment)
            .filter_map(|c| c.get(1))
            .filter_map(|m| clean_tag_text(m.as_str()))
            .collect();
        let tag_name = derive_tag_name(&self.tag_prefix, &component_name);

        Some(ComponentBlock {
            interface_name,
            interface_body,
            component_name,
            maturity_category,
            maturity_level,
            guidance_href,
            translations,
            tag_name,
        })
    }
}

/// Converts an extracted block into component data, parsing its properties
/// and deriving status and recommendation.
#[must_use]
pub fn build_component_data(block: ComponentBlock) -> ComponentData {
    let maturity_category = MaturityCategory::parse(&block.maturity_category);
    let maturity_level = MaturityLevel::parse(&block.maturity_level);
    let status = determine_component_status(maturity_category, maturity_level);

    ComponentData {
        properties: parse_interface_properties(&block.interface_body),
        name: block.component_name,
        tag_name: block.tag_name,
        status,
        maturity_category,
        maturity_level,
        recommendation: recommendation_for(status).to_string(),
        guidance_href: block.guidance_href,
        translations: block.translations,
    }
}

/// Builds a tag name from a component name: prefix plus the lower-cased
/// name with whitespace runs and repeated hyphens folded to one hyphen.
///
/// # Examples
///
/// ```
/// use vads_docs_metadata::derive_tag_name;
///
/// assert_eq!(derive_tag_name("va-", "Button"), "va-button");
/// assert_eq!(derive_tag_name("va-", "Alert - expandable"), "va-alert-expandable");
/// ```
#[must_use]
pub fn derive_tag_name(prefix: &str, component_name: &str) -> String {
    let joined = component_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{prefix}{}", collapse_hyphens(&joined))
}

/// Folds every run of `-` into a single `-`.
pub(crate) fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Returns the text between the brace that ends at `open_end` and its
/// matching close brace. An unterminated body runs to the end of `text`.
fn interface_body(text: &str, open_end: usize) -> String {
    let rest = &text[open_end..];
    let mut depth = 1usize;

    for (offset, c) in rest.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return rest[..offset].to_string();
                }
            }
            _ => {}
        }
    }

    rest.to_string()
}

fn tag_value(regex: &Regex, comment: &str) -> Option<String> {
    regex
        .captures(comment)
        .and_then(|c| c.get(1))
        .and_then(|m| clean_tag_text(m.as_str()))
}

/// Strips a trailing comment terminator and surrounding whitespace.
fn clean_tag_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix("*/").unwrap_or(trimmed).trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
