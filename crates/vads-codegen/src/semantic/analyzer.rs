//! Per-component semantic analysis.

use super::classifier::PropertyClassifier;
use super::purpose::{ComponentPurpose, ContentStrategy, determine_content_strategy, infer_purpose};
use serde::Serialize;
use tracing::debug;
use vads_docs_core::Property;

/// Derived view over one component's properties.
///
/// The property lists are not mutually exclusive: a required
/// `aria-label` sits in both `required_props` and `accessibility_props`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SemanticAnalysis {
    /// User-visible text properties.
    pub visible_text_props: Vec<Property>,
    /// Accessibility properties.
    pub accessibility_props: Vec<Property>,
    /// State properties.
    pub state_props: Vec<Property>,
    /// Configuration properties.
    pub config_props: Vec<Property>,
    /// Event handler properties.
    pub event_props: Vec<Property>,
    /// Properties declared without `?`.
    pub required_props: Vec<Property>,
    /// Slot properties.
    pub slot_props: Vec<Property>,
    /// Any property is form-related.
    pub is_form_related: bool,
    /// The component reacts to events or takes form input.
    pub is_interactive: bool,
    /// At least one state property.
    pub has_states: bool,
    /// At least one conditional-rendering property.
    pub has_conditional_content: bool,
    /// At least one accessibility property.
    pub has_accessibility_enhancements: bool,
    /// At least one slot property.
    pub has_slots: bool,
    /// What the component is for.
    pub inferred_purpose: ComponentPurpose,
    /// How the basic example picks its content.
    pub content_strategy: ContentStrategy,
}

impl Default for SemanticAnalysis {
    fn default() -> Self {
        Self {
            visible_text_props: Vec::new(),
            accessibility_props: Vec::new(),
            state_props: Vec::new(),
            config_props: Vec::new(),
            event_props: Vec::new(),
            required_props: Vec::new(),
            slot_props: Vec::new(),
            is_form_related: false,
            is_interactive: false,
            has_states: false,
            has_conditional_content: false,
            has_accessibility_enhancements: false,
            has_slots: false,
            inferred_purpose: ComponentPurpose::Display,
            content_strategy: ContentStrategy::Unknown,
        }
    }
}

/// Builds a [`SemanticAnalysis`] from a property list.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::{ComponentPurpose, SemanticAnalyzer};
/// use vads_docs_core::Property;
///
/// let analysis = SemanticAnalyzer::default().analyze(&[
///     Property::new("headline", "string", false),
///     Property::new("visible", "boolean", true),
/// ]);
///
/// assert_eq!(analysis.required_props.len(), 1);
/// assert!(analysis.has_states);
/// assert_eq!(analysis.inferred_purpose, ComponentPurpose::Display);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticAnalyzer {
    classifier: PropertyClassifier,
}

impl SemanticAnalyzer {
    /// Creates an analyzer over a specific classifier.
    #[must_use]
    pub const fn new(classifier: PropertyClassifier) -> Self {
        Self { classifier }
    }

    /// Classifies every property, sets the flags, then infers purpose and
    /// content strategy from the result.
    #[must_use]
    pub fn analyze(&self, properties: &[Property]) -> SemanticAnalysis {
        let mut analysis = SemanticAnalysis::default();
        let mut has_conditional = false;

        for property in properties {
            let roles = self.classifier.classify(property);

            if roles.visible_content {
                analysis.visible_text_props.push(property.clone());
            }
            if roles.accessibility {
                analysis.accessibility_props.push(property.clone());
            }
            if roles.state {
                analysis.state_props.push(property.clone());
            }
            if roles.config {
                analysis.config_props.push(property.clone());
            }
            if roles.event {
                analysis.event_props.push(property.clone());
            }
            if roles.slot {
                analysis.slot_props.push(property.clone());
            }
            if property.is_required() {
                analysis.required_props.push(property.clone());
            }
            analysis.is_form_related |= roles.form_related;
            has_conditional |= roles.conditional;
        }

        analysis.is_interactive = !analysis.event_props.is_empty() || analysis.is_form_related;
        analysis.has_states = !analysis.state_props.is_empty();
        analysis.has_conditional_content = has_conditional;
        analysis.has_accessibility_enhancements = !analysis.accessibility_props.is_empty();
        analysis.has_slots = !analysis.slot_props.is_empty();
        analysis.inferred_purpose = infer_purpose(&analysis);
        analysis.content_strategy = determine_content_strategy(&analysis);

        debug!(
            properties = properties.len(),
            purpose = %analysis.inferred_purpose,
            strategy = %analysis.content_strategy,
            "analyzed component properties"
        );

        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(props: &[Property]) -> Vec<&str> {
        props.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_properties() {
        let analysis = SemanticAnalyzer::default().analyze(&[]);
        assert_eq!(analysis, SemanticAnalysis::default());
        assert_eq!(analysis.inferred_purpose, ComponentPurpose::Display);
        assert_eq!(analysis.content_strategy, ContentStrategy::Unknown);
    }

    #[test]
    fn test_button_like_component() {
        let analysis = SemanticAnalyzer::default().analyze(&[
            Property::new("text", "string", false),
            Property::new("disabled", "boolean", true),
        ]);

        assert_eq!(names(&analysis.visible_text_props), ["text"]);
        assert_eq!(names(&analysis.accessibility_props), ["disabled"]);
        assert_eq!(names(&analysis.state_props), ["disabled"]);
        assert_eq!(names(&analysis.required_props), ["text"]);
        assert!(analysis.has_states);
        assert!(analysis.has_accessibility_enhancements);
        assert!(!analysis.is_form_related);
        assert!(!analysis.is_interactive);
        assert_eq!(analysis.content_strategy, ContentStrategy::VisibleFirst);
    }

    #[test]
    fn test_required_accessibility_prop_in_both_lists() {
        let analysis =
            SemanticAnalyzer::default().analyze(&[Property::new("aria-label", "string", false)]);
        assert_eq!(names(&analysis.required_props), ["aria-label"]);
        assert_eq!(names(&analysis.accessibility_props), ["aria-label"]);
        assert!(analysis.visible_text_props.is_empty());
    }

    #[test]
    fn test_required_props_are_never_optional() {
        let analysis = SemanticAnalyzer::default().analyze(&[
            Property::new("label", "string", false),
            Property::new("hint", "string", true),
            Property::new("name", "string", false),
        ]);
        assert!(analysis.required_props.iter().all(|p| !p.optional));
        assert_eq!(names(&analysis.required_props), ["label", "name"]);
    }

    #[test]
    fn test_form_input_component() {
        let analysis = SemanticAnalyzer::default().analyze(&[
            Property::new("label", "string", false),
            Property::new("name", "string", false),
            Property::new("onInput", "(e: Event) => void", true),
        ]);
        assert!(analysis.is_form_related);
        assert!(analysis.is_interactive);
        assert_eq!(analysis.inferred_purpose, ComponentPurpose::Input);
        assert_eq!(analysis.content_strategy, ContentStrategy::FormLabel);
        assert_eq!(names(&analysis.event_props), ["onInput"]);
    }

    #[test]
    fn test_events_make_component_interactive() {
        let analysis =
            SemanticAnalyzer::default().analyze(&[Property::new("onClose", "() => void", true)]);
        assert!(analysis.is_interactive);
        assert!(!analysis.is_form_related);
    }

    #[test]
    fn test_slots_and_conditionals() {
        let analysis = SemanticAnalyzer::default().analyze(&[
            Property::new("iconSlot", "string", true),
            Property::new("showIcon", "boolean", true),
        ]);
        assert!(analysis.has_slots);
        assert!(analysis.has_conditional_content);
        assert_eq!(analysis.inferred_purpose, ComponentPurpose::Container);
        assert_eq!(analysis.content_strategy, ContentStrategy::StructureFirst);
    }

    #[test]
    fn test_notification_component() {
        let analysis = SemanticAnalyzer::default().analyze(&[
            Property::new("headline", "string", true),
            Property::new("message", "string", true),
            Property::new("status", "'info' | 'warning' | 'error'", true),
        ]);
        assert_eq!(analysis.inferred_purpose, ComponentPurpose::Notification);
    }
}
