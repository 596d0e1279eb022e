//! Component model shared across the workspace.
//!
//! Maturity metadata and derived status are closed enumerations so that a
//! typo in a declaration file lands in an explicit `Unknown` variant instead
//! of silently changing behavior downstream.
//!
//! # Examples
//!
//! ```
//! use vads_docs_core::{MaturityCategory, MaturityLevel};
//!
//! assert_eq!(MaturityCategory::parse("caution"), MaturityCategory::Caution);
//! assert_eq!(MaturityLevel::parse("best_practice"), MaturityLevel::BestPractice);
//! assert_eq!(MaturityLevel::parse("someday"), MaturityLevel::Unknown);
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Governance category attached to a component via `@maturityCategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityCategory {
    /// Component is approved for use.
    Use,
    /// Component may be used with care.
    Caution,
    /// Component should not be used.
    DontUse,
    /// Unrecognized category text.
    Unknown,
}

impl MaturityCategory {
    /// Parses the raw tag value. Never fails; unrecognized text maps to `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match canonical_token(raw).as_str() {
            "use" => Self::Use,
            "caution" | "use_with_caution" => Self::Caution,
            "dont_use" | "do_not_use" => Self::DontUse,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Use => "use",
            Self::Caution => "caution",
            Self::DontUse => "dont_use",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MaturityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maturity level attached to a component via `@maturityLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    /// Proven in production and recommended.
    BestPractice,
    /// Deployed to production.
    Deployed,
    /// Candidate awaiting wider adoption.
    Candidate,
    /// Available but with known issues.
    AvailableWithIssues,
    /// Unrecognized level text.
    Unknown,
}

impl MaturityLevel {
    /// Parses the raw tag value. Never fails; unrecognized text maps to `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match canonical_token(raw).as_str() {
            "best_practice" => Self::BestPractice,
            "deployed" => Self::Deployed,
            "candidate" => Self::Candidate,
            "available_with_issues" => Self::AvailableWithIssues,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BestPractice => "best_practice",
            Self::Deployed => "deployed",
            Self::Candidate => "candidate",
            Self::AvailableWithIssues => "available_with_issues",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cases and folds separators so `Best Practice`, `best-practice`
/// and `best_practice` compare equal.
fn canonical_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Status derived from maturity category and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentStatus {
    /// Best-practice component, preferred choice.
    Recommended,
    /// Deployed and stable.
    Stable,
    /// Candidate component, API may change.
    Experimental,
    /// Usable, but read the guidance first.
    UseWithCaution,
    /// Do not use in new work.
    Deprecated,
    /// Metadata did not resolve to a known status.
    Unknown,
}

impl ComponentStatus {
    /// Returns the canonical string form.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::ComponentStatus;
    ///
    /// assert_eq!(ComponentStatus::UseWithCaution.as_str(), "USE_WITH_CAUTION");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "RECOMMENDED",
            Self::Stable => "STABLE",
            Self::Experimental => "EXPERIMENTAL",
            Self::UseWithCaution => "USE_WITH_CAUTION",
            Self::Deprecated => "DEPRECATED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "recommended" => Ok(Self::Recommended),
            "stable" => Ok(Self::Stable),
            "experimental" => Ok(Self::Experimental),
            "use_with_caution" | "caution" => Ok(Self::UseWithCaution),
            "deprecated" => Ok(Self::Deprecated),
            "unknown" => Ok(Self::Unknown),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid component status: '{s}'"
            ))),
        }
    }
}

/// One metadata comment paired with its interface, as found in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBlock {
    /// Interface identifier, e.g. `VaButton`.
    pub interface_name: String,
    /// Raw text between the interface braces.
    pub interface_body: String,
    /// Value of `@componentName`.
    pub component_name: String,
    /// Raw value of `@maturityCategory`.
    pub maturity_category: String,
    /// Raw value of `@maturityLevel`.
    pub maturity_level: String,
    /// Value of `@guidanceHref`, if present.
    pub guidance_href: Option<String>,
    /// Every `@translations` value in document order.
    pub translations: Vec<String>,
    /// Derived custom element name, e.g. `va-button`.
    pub tag_name: String,
}

/// A single interface property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name with surrounding quotes removed.
    pub name: String,
    /// Raw type expression text.
    #[serde(rename = "type")]
    pub type_text: String,
    /// Whether the declaration used `?:`.
    pub optional: bool,
    /// Text of the comment lines directly above the declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    /// Creates a property without a description.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::Property;
    ///
    /// let prop = Property::new("text", "string", false);
    /// assert!(prop.is_required());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, type_text: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            optional,
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` when the property must be supplied.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !self.optional
    }
}

/// A fully parsed component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentData {
    /// Display name from `@componentName`.
    pub name: String,
    /// Custom element tag, e.g. `va-button`.
    pub tag_name: String,
    /// Derived status.
    pub status: ComponentStatus,
    /// Parsed maturity category.
    pub maturity_category: MaturityCategory,
    /// Parsed maturity level.
    pub maturity_level: MaturityLevel,
    /// Human-readable recommendation derived from `status`.
    pub recommendation: String,
    /// Design-system guidance link, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_href: Option<String>,
    /// Translation keys declared for the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<String>,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
}

impl ComponentData {
    /// Iterates over required properties in declaration order.
    pub fn required_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_required())
    }

    /// Iterates over optional properties in declaration order.
    pub fn optional_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.optional)
    }

    /// Looks up a property by exact name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Components keyed by name, iterated in insertion (file) order.
///
/// # Examples
///
/// ```
/// use vads_docs_core::{ComponentData, ComponentRegistry, ComponentStatus, MaturityCategory, MaturityLevel};
///
/// let mut registry = ComponentRegistry::new();
/// registry.insert(ComponentData {
///     name: "Button".to_string(),
///     tag_name: "va-button".to_string(),
///     status: ComponentStatus::Recommended,
///     maturity_category: MaturityCategory::Use,
///     maturity_level: MaturityLevel::BestPractice,
///     recommendation: String::new(),
///     guidance_href: None,
///     translations: vec![],
///     properties: vec![],
/// });
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("Button").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    entries: Vec<ComponentData>,
    index: HashMap<String, usize>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a component keyed by its name.
    ///
    /// A component with the same name is replaced in place, keeping its
    /// original position, and the previous value is returned.
    pub fn insert(&mut self, component: ComponentData) -> Option<ComponentData> {
        if let Some(&slot) = self.index.get(&component.name) {
            return Some(std::mem::replace(&mut self.entries[slot], component));
        }
        self.index.insert(component.name.clone(), self.entries.len());
        self.entries.push(component);
        None
    }

    /// Exact key lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentData> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Iterates over components in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComponentData> {
        self.entries.iter()
    }

    /// Iterates over component names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no components were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComponentRegistry {
    type Item = &'a ComponentData;
    type IntoIter = std::slice::Iter<'a, ComponentData>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ComponentRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for component in &self.entries {
            map.serialize_entry(&component.name, component)?;
        }
        map.end()
    }
}

/// Which aspect of a component an example demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExampleType {
    /// Minimal working markup.
    Basic,
    /// Each state property toggled on its own.
    State,
    /// Accessibility attributes applied.
    Accessibility,
    /// Component inside a `<form>`.
    Form,
}

impl ExampleType {
    /// All example types in generation order.
    pub const ALL: [Self; 4] = [Self::Basic, Self::State, Self::Accessibility, Self::Form];

    /// Returns the lower-case string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::State => "state",
            Self::Accessibility => "accessibility",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for ExampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExampleType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "state" | "states" => Ok(Self::State),
            "accessibility" | "a11y" => Ok(Self::Accessibility),
            "form" => Ok(Self::Form),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid example type: '{s}' (expected: basic, state, accessibility, or form)"
            ))),
        }
    }
}

/// A generated usage example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Short heading, e.g. "Basic Usage".
    pub title: String,
    /// One-sentence explanation.
    pub description: String,
    /// Literal markup.
    pub code: String,
    /// Display-only language tag for the code fence.
    pub framework: String,
    /// What the example demonstrates.
    pub purpose: ExampleType,
}

/// Caller options for example generation.
///
/// `include_description` and `example_types` are honoured by the caller
/// layer (formatting and post-filtering); generation itself only reads
/// `framework`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Display tag stamped onto every example.
    pub framework: String,
    /// Whether formatted output should include example descriptions.
    pub include_description: bool,
    /// Requested example types; empty means all.
    pub example_types: Vec<ExampleType>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            framework: "html".to_string(),
            include_description: true,
            example_types: Vec::new(),
        }
    }
}

impl GenerateOptions {
    /// Returns `true` if examples of `kind` should be kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::{ExampleType, GenerateOptions};
    ///
    /// let all = GenerateOptions::default();
    /// assert!(all.wants(ExampleType::Form));
    ///
    /// let only_basic = GenerateOptions {
    ///     example_types: vec![ExampleType::Basic],
    ///     ..Default::default()
    /// };
    /// assert!(!only_basic.wants(ExampleType::Form));
    /// ```
    #[must_use]
    pub fn wants(&self, kind: ExampleType) -> bool {
        self.example_types.is_empty() || self.example_types.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str) -> ComponentData {
        ComponentData {
            name: name.to_string(),
            tag_name: format!("va-{}", name.to_lowercase()),
            status: ComponentStatus::Stable,
            maturity_category: MaturityCategory::Use,
            maturity_level: MaturityLevel::Deployed,
            recommendation: String::new(),
            guidance_href: None,
            translations: vec![],
            properties: vec![],
        }
    }

    #[test]
    fn test_maturity_category_parse() {
        assert_eq!(MaturityCategory::parse("use"), MaturityCategory::Use);
        assert_eq!(MaturityCategory::parse(" Caution "), MaturityCategory::Caution);
        assert_eq!(MaturityCategory::parse("dont_use"), MaturityCategory::DontUse);
        assert_eq!(MaturityCategory::parse("don't use"), MaturityCategory::DontUse);
        assert_eq!(MaturityCategory::parse("maybe"), MaturityCategory::Unknown);
    }

    #[test]
    fn test_maturity_level_parse() {
        assert_eq!(MaturityLevel::parse("best_practice"), MaturityLevel::BestPractice);
        assert_eq!(MaturityLevel::parse("Best Practice"), MaturityLevel::BestPractice);
        assert_eq!(MaturityLevel::parse("deployed"), MaturityLevel::Deployed);
        assert_eq!(MaturityLevel::parse("candidate"), MaturityLevel::Candidate);
        assert_eq!(
            MaturityLevel::parse("available-with-issues"),
            MaturityLevel::AvailableWithIssues
        );
        assert_eq!(MaturityLevel::parse(""), MaturityLevel::Unknown);
    }

    #[test]
    fn test_component_status_from_str() {
        assert_eq!(
            "use_with_caution".parse::<ComponentStatus>().unwrap(),
            ComponentStatus::UseWithCaution
        );
        assert_eq!(
            "RECOMMENDED".parse::<ComponentStatus>().unwrap(),
            ComponentStatus::Recommended
        );
        assert!("bogus".parse::<ComponentStatus>().is_err());
    }

    #[test]
    fn test_component_status_serializes_screaming_case() {
        let json = serde_json::to_string(&ComponentStatus::UseWithCaution).unwrap();
        assert_eq!(json, "\"USE_WITH_CAUTION\"");
    }

    #[test]
    fn test_property_type_field_serializes_as_type() {
        let prop = Property::new("text", "string", false);
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "string");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let mut registry = ComponentRegistry::new();
        registry.insert(component("Zeta"));
        registry.insert(component("Alpha"));
        registry.insert(component("Mid"));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_registry_replaces_duplicate_in_place() {
        let mut registry = ComponentRegistry::new();
        registry.insert(component("Alpha"));
        registry.insert(component("Beta"));

        let mut replacement = component("Alpha");
        replacement.tag_name = "va-alpha-2".to_string();
        let previous = registry.insert(replacement);

        assert!(previous.is_some());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().next(), Some("Alpha"));
        assert_eq!(registry.get("Alpha").unwrap().tag_name, "va-alpha-2");
    }

    #[test]
    fn test_registry_serializes_as_ordered_map() {
        let mut registry = ComponentRegistry::new();
        registry.insert(component("Zeta"));
        registry.insert(component("Alpha"));

        let json = serde_json::to_string(&registry).unwrap();
        let zeta = json.find("\"Zeta\"").unwrap();
        let alpha = json.find("\"Alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_example_type_from_str() {
        assert_eq!("basic".parse::<ExampleType>().unwrap(), ExampleType::Basic);
        assert_eq!("A11Y".parse::<ExampleType>().unwrap(), ExampleType::Accessibility);
        assert!("xml".parse::<ExampleType>().is_err());
    }

    #[test]
    fn test_generate_options_default() {
        let options = GenerateOptions::default();
        assert_eq!(options.framework, "html");
        assert!(options.include_description);
        assert!(ExampleType::ALL.iter().all(|t| options.wants(*t)));
    }
}
