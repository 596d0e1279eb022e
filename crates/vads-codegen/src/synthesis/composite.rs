//! Composite component detection and child markup.
//!
//! Some components are only meaningful with children: a radio group
//! without options renders nothing useful. Detection is a substring
//! dispatch on the tag name, checked in a fixed order.

use crate::semantic::SemanticAnalysis;
use serde::Serialize;
use std::fmt;

/// Labels for generated choice options, used in order.
pub const CHOICE_LABELS: &[&str] = &[
    "Sojourner Truth",
    "Frederick Douglass",
    "Booker T. Washington",
    "George Washington Carver",
];

/// Headers for generated accordion items.
pub const SECTION_HEADERS: &[&str] = &["Section 1", "Section 2"];

/// Texts for generated buttons in a button group.
pub const ACTION_TEXTS: &[&str] = &["Continue", "Back"];

/// Shared `name` of generated choice options.
pub const CHOICE_GROUP_NAME: &str = "example-choice";

/// Placeholder rendered inside components that take slotted content.
pub const SLOT_PLACEHOLDER: &str = "  <!-- Slot content goes here -->";

/// Known kinds of composite component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeKind {
    /// Radio or checkbox group with option children.
    FormChoiceGroup,
    /// Accordion with item children.
    CollapsibleContainer,
    /// Button group with button children.
    ActionGroup,
}

impl CompositeKind {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FormChoiceGroup => "form-choice-group",
            Self::CollapsibleContainer => "collapsible-container",
            Self::ActionGroup => "action-group",
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute rendered on each generated child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildProp {
    /// Attribute name.
    pub name: String,
    /// Whether the child component requires it.
    pub required: bool,
}

impl ChildProp {
    fn required_attr(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
        }
    }
}

/// How to render the children of a composite component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeInfo {
    /// Composite kind.
    #[serde(rename = "type")]
    pub kind: CompositeKind,
    /// Tag of each child element.
    pub child_element: String,
    /// Number of children to render.
    pub child_count: usize,
    /// Attributes of each child, in render order.
    pub child_props: Vec<ChildProp>,
}

/// Detects whether `tag_name` names a composite component.
///
/// The analysis is accepted for parity with the other synthesis steps;
/// detection depends on the tag alone.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::SemanticAnalysis;
/// use vads_docs_codegen::synthesis::{CompositeKind, detect_composite_component};
///
/// let info = detect_composite_component("va-radio-group", &SemanticAnalysis::default()).unwrap();
/// assert_eq!(info.kind, CompositeKind::FormChoiceGroup);
/// assert_eq!(info.child_element, "va-radio-option");
/// assert_eq!(info.child_count, 3);
/// ```
#[must_use]
pub fn detect_composite_component(
    tag_name: &str,
    _analysis: &SemanticAnalysis,
) -> Option<CompositeInfo> {
    let tag = tag_name.to_lowercase();

    if tag.contains("radio") || tag.contains("checkbox") {
        let child_element = if tag.contains("radio") {
            "va-radio-option"
        } else {
            "va-checkbox"
        };
        Some(CompositeInfo {
            kind: CompositeKind::FormChoiceGroup,
            child_element: child_element.to_string(),
            child_count: 3,
            child_props: vec![
                ChildProp::required_attr("label"),
                ChildProp::required_attr("name"),
                ChildProp::required_attr("value"),
            ],
        })
    } else if tag.contains("accordion") {
        Some(CompositeInfo {
            kind: CompositeKind::CollapsibleContainer,
            child_element: "va-accordion-item".to_string(),
            child_count: 2,
            child_props: vec![ChildProp::required_attr("header")],
        })
    } else if tag.contains("button-group") {
        Some(CompositeInfo {
            kind: CompositeKind::ActionGroup,
            child_element: "va-button".to_string(),
            child_count: 2,
            child_props: vec![ChildProp::required_attr("text")],
        })
    } else {
        None
    }
}

/// Renders `info.child_count` children, one per line, each indented by
/// two spaces.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::SemanticAnalysis;
/// use vads_docs_codegen::synthesis::{detect_composite_component, generate_composite_children};
///
/// let info = detect_composite_component("va-button-group", &SemanticAnalysis::default()).unwrap();
/// assert_eq!(
///     generate_composite_children(&info),
///     "  <va-button text=\"Continue\" />\n  <va-button text=\"Back\" />"
/// );
/// ```
#[must_use]
pub fn generate_composite_children(info: &CompositeInfo) -> String {
    (0..info.child_count)
        .map(|index| {
            let attributes: String = info
                .child_props
                .iter()
                .map(|prop| {
                    format!(
                        " {}=\"{}\"",
                        prop.name,
                        child_prop_value(info.kind, &prop.name, index)
                    )
                })
                .collect();
            format!("  <{}{attributes} />", info.child_element)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the slot placeholder if the component has slots, else an empty string.
#[must_use]
pub fn generate_slot_content(analysis: &SemanticAnalysis) -> String {
    if analysis.has_slots {
        SLOT_PLACEHOLDER.to_string()
    } else {
        String::new()
    }
}

fn child_prop_value(kind: CompositeKind, prop: &str, index: usize) -> String {
    match (kind, prop) {
        (CompositeKind::FormChoiceGroup, "label") => choice_label(index),
        (CompositeKind::FormChoiceGroup, "name") => CHOICE_GROUP_NAME.to_string(),
        (CompositeKind::FormChoiceGroup, "value") => slug(&choice_label(index)),
        (CompositeKind::CollapsibleContainer, _) => indexed(SECTION_HEADERS, index, "Section"),
        (CompositeKind::ActionGroup, _) => indexed(ACTION_TEXTS, index, "Button"),
        (CompositeKind::FormChoiceGroup, _) => String::new(),
    }
}

fn choice_label(index: usize) -> String {
    indexed(CHOICE_LABELS, index, "Option")
}

fn indexed(table: &[&str], index: usize, fallback: &str) -> String {
    table
        .get(index)
        .map_or_else(|| format!("{fallback} {}", index + 1), |value| (*value).to_string())
}

fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(tag: &str) -> Option<CompositeInfo> {
        detect_composite_component(tag, &SemanticAnalysis::default())
    }

    #[test]
    fn test_radio_group() {
        let info = detect("va-radio-group").unwrap();
        assert_eq!(info.kind.as_str(), "form-choice-group");
        assert_eq!(info.child_element, "va-radio-option");
        assert_eq!(info.child_count, 3);

        let children = generate_composite_children(&info);
        let lines: Vec<&str> = children.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "  <va-radio-option label=\"Sojourner Truth\" name=\"example-choice\" value=\"sojourner-truth\" />"
        );
        assert!(lines[2].contains("label=\"Booker T. Washington\""));
        assert!(lines[2].contains("value=\"booker-t-washington\""));
    }

    #[test]
    fn test_checkbox_group() {
        let info = detect("va-checkbox-group").unwrap();
        assert_eq!(info.kind, CompositeKind::FormChoiceGroup);
        assert_eq!(info.child_element, "va-checkbox");
    }

    #[test]
    fn test_labels_fall_back_past_table() {
        let info = CompositeInfo {
            child_count: 6,
            ..detect("va-radio").unwrap()
        };
        let children = generate_composite_children(&info);
        let lines: Vec<&str> = children.lines().collect();
        assert!(lines[3].contains("George Washington Carver"));
        assert!(lines[4].contains("label=\"Option 5\""));
        assert!(lines[5].contains("value=\"option-6\""));
    }

    #[test]
    fn test_accordion() {
        let info = detect("va-accordion").unwrap();
        assert_eq!(info.kind, CompositeKind::CollapsibleContainer);
        assert_eq!(
            generate_composite_children(&info),
            "  <va-accordion-item header=\"Section 1\" />\n  <va-accordion-item header=\"Section 2\" />"
        );
    }

    #[test]
    fn test_button_group() {
        let info = detect("va-button-group").unwrap();
        assert_eq!(info.kind, CompositeKind::ActionGroup);
        assert_eq!(info.child_count, 2);
    }

    #[test]
    fn test_plain_button_is_not_composite() {
        assert!(detect("va-button").is_none());
        assert!(detect("va-alert").is_none());
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert!(detect("VA-RADIO-GROUP").is_some());
    }

    #[test]
    fn test_zero_children_render_empty() {
        let info = CompositeInfo {
            child_count: 0,
            ..detect("va-accordion").unwrap()
        };
        assert_eq!(generate_composite_children(&info), "");
    }

    #[test]
    fn test_slot_content() {
        assert_eq!(generate_slot_content(&SemanticAnalysis::default()), "");
        let analysis = SemanticAnalysis {
            has_slots: true,
            ..SemanticAnalysis::default()
        };
        assert_eq!(generate_slot_content(&analysis), SLOT_PLACEHOLDER);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&CompositeKind::CollapsibleContainer).unwrap();
        assert_eq!(json, "\"collapsible-container\"");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Booker T. Washington"), "booker-t-washington");
        assert_eq!(slug("  Option 1 "), "option-1");
    }
}
