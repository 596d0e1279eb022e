//! Usage example generation.
//!
//! Turns one [`ComponentData`] into an ordered list of markup examples.
//! The basic example always comes first; state, accessibility and form
//! examples follow only when the analysis shows the component has
//! something to demonstrate.

use super::composite::{
    detect_composite_component, generate_composite_children, generate_slot_content,
};
use super::values::ValueGenerator;
use crate::semantic::{ContentStrategy, PropertyClassifier, SemanticAnalysis, SemanticAnalyzer};
use tracing::debug;
use vads_docs_core::{ComponentData, Example, ExampleType, GenerateOptions, Property};

/// Value used for accessibility attributes that have no generated value.
pub const DEFAULT_ACCESSIBLE_TEXT: &str = "Accessible description";

/// Number of state and accessibility properties shown per example.
const PROPS_PER_EXAMPLE: usize = 2;

/// Stateless example generator.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one instance can serve every component.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::ExampleGenerator;
/// use vads_docs_core::{
///     ComponentData, ComponentStatus, GenerateOptions, MaturityCategory, MaturityLevel, Property,
/// };
///
/// let component = ComponentData {
///     name: "Button".to_string(),
///     tag_name: "va-button".to_string(),
///     status: ComponentStatus::Recommended,
///     maturity_category: MaturityCategory::Use,
///     maturity_level: MaturityLevel::BestPractice,
///     recommendation: String::new(),
///     guidance_href: None,
///     translations: vec![],
///     properties: vec![Property::new("text", "string", false)],
/// };
///
/// let examples = ExampleGenerator::default().generate_examples(&component, &GenerateOptions::default());
/// assert_eq!(examples[0].title, "Basic Usage");
/// assert_eq!(examples[0].code, "<va-button text=\"Veterans Benefits\"></va-button>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleGenerator {
    analyzer: SemanticAnalyzer,
    classifier: PropertyClassifier,
    values: ValueGenerator,
}

impl ExampleGenerator {
    /// Creates a generator whose analysis and values share one classifier.
    #[must_use]
    pub const fn new(classifier: PropertyClassifier) -> Self {
        Self {
            analyzer: SemanticAnalyzer::new(classifier),
            classifier,
            values: ValueGenerator::new(classifier),
        }
    }

    /// Generates every applicable example for `component`.
    ///
    /// `options.framework` is stamped onto each example. The result is not
    /// filtered by `options.example_types`; callers apply that filter.
    #[must_use]
    pub fn generate_examples(
        &self,
        component: &ComponentData,
        options: &GenerateOptions,
    ) -> Vec<Example> {
        let analysis = self.analyzer.analyze(&component.properties);
        self.generate_examples_with_analysis(component, &analysis, options)
    }

    /// Generates examples from an analysis computed by the caller.
    #[must_use]
    pub fn generate_examples_with_analysis(
        &self,
        component: &ComponentData,
        analysis: &SemanticAnalysis,
        options: &GenerateOptions,
    ) -> Vec<Example> {
        let mut examples = vec![self.basic_example(component, analysis, options)];

        if analysis.has_states {
            examples.push(self.state_example(component, analysis, options));
        }
        if analysis.has_accessibility_enhancements {
            examples.push(self.accessibility_example(component, analysis, options));
        }
        if analysis.is_form_related {
            examples.push(self.form_example(component, analysis, options));
        }

        debug!(
            component = %component.name,
            examples = examples.len(),
            "generated usage examples"
        );
        examples
    }

    fn basic_example(
        &self,
        component: &ComponentData,
        analysis: &SemanticAnalysis,
        options: &GenerateOptions,
    ) -> Example {
        let mut attributes: Vec<String> = analysis
            .required_props
            .iter()
            .filter_map(|p| self.attribute(p, analysis))
            .collect();

        match analysis.content_strategy {
            ContentStrategy::VisibleFirst => {
                attributes.extend(
                    analysis
                        .visible_text_props
                        .iter()
                        .filter(|p| p.optional)
                        .take(PROPS_PER_EXAMPLE)
                        .filter_map(|p| self.attribute(p, analysis)),
                );
            }
            ContentStrategy::FormLabel => {
                attributes.extend(
                    analysis
                        .visible_text_props
                        .iter()
                        .find(|p| p.optional && p.name.to_lowercase().contains("label"))
                        .and_then(|p| self.attribute(p, analysis)),
                );
            }
            ContentStrategy::StructureFirst | ContentStrategy::Unknown => {}
        }

        let inner = detect_composite_component(&component.tag_name, analysis).map_or_else(
            || generate_slot_content(analysis),
            |info| generate_composite_children(&info),
        );

        example(
            "Basic Usage",
            format!(
                "Basic usage of the {} component with its required properties.",
                component.name
            ),
            element(&component.tag_name, &attributes, &inner),
            ExampleType::Basic,
            options,
        )
    }

    fn state_example(
        &self,
        component: &ComponentData,
        analysis: &SemanticAnalysis,
        options: &GenerateOptions,
    ) -> Example {
        let states: Vec<&Property> = analysis.state_props.iter().take(PROPS_PER_EXAMPLE).collect();
        let base = self.base_attributes(analysis, &states);
        let tag = &component.tag_name;

        let mut lines = vec!["<!-- Default state -->".to_string(), element(tag, &base, "")];
        for state in &states {
            let mut attributes = base.clone();
            attributes.push(
                self.attribute(state, analysis)
                    .unwrap_or_else(|| state.name.clone()),
            );
            lines.push(format!("<!-- {} state -->", state.name));
            lines.push(element(tag, &attributes, ""));
        }

        example(
            "State Variations",
            format!(
                "The {} component in its default state and with each state property applied.",
                component.name
            ),
            lines.join("\n"),
            ExampleType::State,
            options,
        )
    }

    fn accessibility_example(
        &self,
        component: &ComponentData,
        analysis: &SemanticAnalysis,
        options: &GenerateOptions,
    ) -> Example {
        let enhancements: Vec<&Property> = analysis
            .accessibility_props
            .iter()
            .take(PROPS_PER_EXAMPLE)
            .collect();
        let mut attributes = self.base_attributes(analysis, &enhancements);
        for property in &enhancements {
            let value = self
                .values
                .generate_contextual_value(property, analysis)
                .unwrap_or_else(|| DEFAULT_ACCESSIBLE_TEXT.to_string());
            attributes.push(render_attribute(property, &value));
        }

        example(
            "Accessibility Enhanced",
            format!(
                "The {} component with attributes for assistive technology.",
                component.name
            ),
            element(&component.tag_name, &attributes, ""),
            ExampleType::Accessibility,
            options,
        )
    }

    fn form_example(
        &self,
        component: &ComponentData,
        analysis: &SemanticAnalysis,
        options: &GenerateOptions,
    ) -> Example {
        let mut attributes: Vec<String> = analysis
            .required_props
            .iter()
            .filter(|p| {
                self.classifier
                    .is_form_related(&p.name.to_lowercase(), &p.type_text.to_lowercase())
            })
            .filter_map(|p| self.attribute(p, analysis))
            .collect();
        if !attributes.iter().any(|a| attribute_name(a) == "required") {
            attributes.push("required".to_string());
        }

        example(
            "Form Context",
            format!(
                "The {} component inside a form with validation attributes.",
                component.name
            ),
            format!(
                "<form>\n  {}\n</form>",
                element(&component.tag_name, &attributes, "")
            ),
            ExampleType::Form,
            options,
        )
    }

    /// Required attributes, minus the properties an example renders itself.
    fn base_attributes(&self, analysis: &SemanticAnalysis, shown: &[&Property]) -> Vec<String> {
        analysis
            .required_props
            .iter()
            .filter(|p| !shown.iter().any(|s| s.name == p.name))
            .filter_map(|p| self.attribute(p, analysis))
            .collect()
    }

    fn attribute(&self, property: &Property, analysis: &SemanticAnalysis) -> Option<String> {
        self.values
            .generate_contextual_value(property, analysis)
            .map(|value| render_attribute(property, &value))
    }
}

/// Renders one attribute: boolean `true` as a bare name, otherwise
/// `name="value"`, switching to single quotes when the value holds `"`.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::synthesis::render_attribute;
/// use vads_docs_core::Property;
///
/// let disabled = Property::new("disabled", "boolean", true);
/// assert_eq!(render_attribute(&disabled, "true"), "disabled");
///
/// let text = Property::new("text", "string", false);
/// assert_eq!(render_attribute(&text, "Go"), "text=\"Go\"");
/// ```
#[must_use]
pub fn render_attribute(property: &Property, value: &str) -> String {
    if value == "true" && property.type_text.to_lowercase().contains("boolean") {
        property.name.clone()
    } else if value.contains('"') {
        format!("{}='{value}'", property.name)
    } else {
        format!("{}=\"{value}\"", property.name)
    }
}

fn attribute_name(attribute: &str) -> &str {
    attribute.split('=').next().unwrap_or(attribute)
}

fn element(tag: &str, attributes: &[String], inner: &str) -> String {
    let rendered: String = attributes.iter().map(|a| format!(" {a}")).collect();
    if inner.is_empty() {
        format!("<{tag}{rendered}></{tag}>")
    } else {
        format!("<{tag}{rendered}>\n{inner}\n</{tag}>")
    }
}

fn example(
    title: &str,
    description: String,
    code: String,
    purpose: ExampleType,
    options: &GenerateOptions,
) -> Example {
    Example {
        title: title.to_string(),
        description,
        code,
        framework: options.framework.clone(),
        purpose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vads_docs_core::{ComponentStatus, MaturityCategory, MaturityLevel};

    fn component(tag: &str, properties: Vec<Property>) -> ComponentData {
        ComponentData {
            name: tag.trim_start_matches("va-").to_string(),
            tag_name: tag.to_string(),
            status: ComponentStatus::Stable,
            maturity_category: MaturityCategory::Use,
            maturity_level: MaturityLevel::Deployed,
            recommendation: String::new(),
            guidance_href: None,
            translations: vec![],
            properties,
        }
    }

    fn generate(component: &ComponentData) -> Vec<Example> {
        ExampleGenerator::default().generate_examples(component, &GenerateOptions::default())
    }

    fn titles(examples: &[Example]) -> Vec<&str> {
        examples.iter().map(|e| e.title.as_str()).collect()
    }

    // ========================================================================
    // Basic Usage
    // ========================================================================

    #[test]
    fn test_zero_properties() {
        let examples = generate(&component("va-divider", vec![]));
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].title, "Basic Usage");
        assert_eq!(examples[0].code, "<va-divider></va-divider>");
        assert_eq!(examples[0].purpose, ExampleType::Basic);
        assert_eq!(examples[0].framework, "html");
    }

    #[test]
    fn test_button_examples() {
        let examples = generate(&component(
            "va-button",
            vec![
                Property::new("text", "string", false),
                Property::new("disabled", "boolean", true),
            ],
        ));
        assert_eq!(
            titles(&examples),
            ["Basic Usage", "State Variations", "Accessibility Enhanced"]
        );
        assert_eq!(
            examples[0].code,
            "<va-button text=\"Veterans Benefits\"></va-button>"
        );
        assert_eq!(
            examples[1].code,
            "<!-- Default state -->\n\
             <va-button text=\"Veterans Benefits\"></va-button>\n\
             <!-- disabled state -->\n\
             <va-button text=\"Veterans Benefits\" disabled></va-button>"
        );
        assert_eq!(
            examples[2].code,
            "<va-button text=\"Veterans Benefits\" disabled></va-button>"
        );
    }

    #[test]
    fn test_visible_first_adds_two_optional_texts() {
        let examples = generate(&component(
            "va-card",
            vec![
                Property::new("headline", "string", true),
                Property::new("caption", "string", true),
                Property::new("summary", "string", true),
            ],
        ));
        let code = &examples[0].code;
        assert!(code.contains("headline="));
        assert!(code.contains("caption="));
        assert!(!code.contains("summary="));
    }

    #[test]
    fn test_form_label_strategy() {
        let examples = generate(&component(
            "va-text-input",
            vec![
                Property::new("name", "string", false),
                Property::new("hint", "string", true),
                Property::new("label", "string", true),
            ],
        ));
        assert_eq!(
            examples[0].code,
            "<va-text-input name=\"email\" label=\"Email Address\"></va-text-input>"
        );
    }

    #[test]
    fn test_composite_children_inside_basic() {
        let examples = generate(&component(
            "va-radio-group",
            vec![Property::new("label", "string", false)],
        ));
        let lines: Vec<&str> = examples[0].code.lines().collect();
        assert!(lines[0].starts_with("<va-radio-group"));
        assert!(lines[1].contains("label=\"Sojourner Truth\""));
        assert_eq!(lines.last(), Some(&"</va-radio-group>"));
    }

    #[test]
    fn test_slot_placeholder_inside_basic() {
        let examples = generate(&component(
            "va-banner",
            vec![Property::new("iconSlot", "string", true)],
        ));
        assert_eq!(
            examples[0].code,
            "<va-banner>\n  <!-- Slot content goes here -->\n</va-banner>"
        );
    }

    #[test]
    fn test_required_property_without_value_is_skipped() {
        let examples = generate(&component(
            "va-widget",
            vec![Property::new("render", "() => void", false)],
        ));
        assert_eq!(examples[0].code, "<va-widget></va-widget>");
    }

    // ========================================================================
    // Conditional examples
    // ========================================================================

    #[test]
    fn test_state_example_uses_first_two_states() {
        let examples = generate(&component(
            "va-alert",
            vec![
                Property::new("visible", "boolean", true),
                Property::new("closeable", "boolean", true),
                Property::new("fullwidth", "boolean", true),
            ],
        ));
        let state = examples
            .iter()
            .find(|e| e.purpose == ExampleType::State)
            .unwrap();
        assert!(state.code.contains("<!-- visible state -->"));
        assert!(state.code.contains("<!-- closeable state -->"));
        assert!(!state.code.contains("fullwidth"));
    }

    #[test]
    fn test_accessibility_default_text() {
        let examples = generate(&component(
            "va-link",
            vec![Property::new("role", "Role", true)],
        ));
        let a11y = examples
            .iter()
            .find(|e| e.purpose == ExampleType::Accessibility)
            .unwrap();
        assert_eq!(
            a11y.code,
            "<va-link role=\"Accessible description\"></va-link>"
        );
    }

    #[test]
    fn test_form_context() {
        let examples = generate(&component(
            "va-text-input",
            vec![
                Property::new("label", "string", false),
                Property::new("name", "string", false),
            ],
        ));
        let form = examples.last().unwrap();
        assert_eq!(form.title, "Form Context");
        assert_eq!(
            form.code,
            "<form>\n  <va-text-input name=\"email\" required></va-text-input>\n</form>"
        );
    }

    #[test]
    fn test_form_context_does_not_duplicate_required() {
        let examples = generate(&component(
            "va-checkbox",
            vec![Property::new("required", "boolean", false)],
        ));
        let form = examples.last().unwrap();
        assert_eq!(form.purpose, ExampleType::Form);
        assert_eq!(form.code.matches("required").count(), 1);
    }

    #[test]
    fn test_example_order_is_fixed() {
        let examples = generate(&component(
            "va-text-input",
            vec![
                Property::new("label", "string", false),
                Property::new("error", "string", true),
                Property::new("aria-describedby", "string", true),
            ],
        ));
        let kinds: Vec<ExampleType> = examples.iter().map(|e| e.purpose).collect();
        assert_eq!(kinds, ExampleType::ALL);
    }

    #[test]
    fn test_framework_is_stamped() {
        let options = GenerateOptions {
            framework: "react".to_string(),
            ..GenerateOptions::default()
        };
        let examples = ExampleGenerator::default()
            .generate_examples(&component("va-divider", vec![]), &options);
        assert_eq!(examples[0].framework, "react");
    }

    #[test]
    fn test_generator_does_not_filter_types() {
        let options = GenerateOptions {
            example_types: vec![ExampleType::Form],
            ..GenerateOptions::default()
        };
        let examples = ExampleGenerator::default()
            .generate_examples(&component("va-divider", vec![]), &options);
        assert_eq!(examples.len(), 1);
    }

    #[test]
    fn test_render_attribute_quotes() {
        let prop = Property::new("options", "string[]", true);
        assert_eq!(
            render_attribute(&prop, r#"["a"]"#),
            r#"options='["a"]'"#
        );
        let prop = Property::new("open", "string", true);
        assert_eq!(render_attribute(&prop, "true"), "open=\"true\"");
    }
}
