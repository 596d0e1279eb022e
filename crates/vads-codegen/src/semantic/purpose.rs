//! Component purpose and content strategy inference.
//!
//! Both are ordered decision lists: the first branch that matches decides,
//! later branches are never consulted.

use super::analyzer::SemanticAnalysis;
use serde::Serialize;
use std::fmt;

/// What a component is for, as far as its properties reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentPurpose {
    /// Triggers an action (buttons).
    Action,
    /// Collects user input.
    Input,
    /// Communicates status or feedback.
    Notification,
    /// Moves the user somewhere else.
    Navigation,
    /// Groups other content.
    Container,
    /// Presents information.
    Display,
}

impl ComponentPurpose {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Input => "INPUT",
            Self::Notification => "NOTIFICATION",
            Self::Navigation => "NAVIGATION",
            Self::Container => "CONTAINER",
            Self::Display => "DISPLAY",
        }
    }
}

impl fmt::Display for ComponentPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which optional properties the basic example surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStrategy {
    /// A form control whose label carries the content.
    FormLabel,
    /// Visible text properties come first.
    VisibleFirst,
    /// Content arrives through slots.
    StructureFirst,
    /// Nothing to go on.
    Unknown,
}

impl ContentStrategy {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FormLabel => "FORM_LABEL",
            Self::VisibleFirst => "VISIBLE_FIRST",
            Self::StructureFirst => "STRUCTURE_FIRST",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ContentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const NOTIFICATION_TERMS: &[&str] = &["alert", "message", "notification"];
const NAVIGATION_TERMS: &[&str] = &["link", "href", "nav"];
const ACTION_TERMS: &[&str] = &["button", "click"];

fn any_visible_name_contains(analysis: &SemanticAnalysis, terms: &[&str]) -> bool {
    analysis.visible_text_props.iter().any(|p| {
        let name = p.name.to_lowercase();
        terms.iter().any(|term| name.contains(term))
    })
}

/// Infers the purpose from an analysis whose property lists and flags are filled in.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::{ComponentPurpose, SemanticAnalyzer, infer_purpose};
/// use vads_docs_core::Property;
///
/// let analysis = SemanticAnalyzer::default().analyze(&[
///     Property::new("label", "string", false),
///     Property::new("name", "string", false),
/// ]);
/// assert_eq!(infer_purpose(&analysis), ComponentPurpose::Input);
/// ```
#[must_use]
pub fn infer_purpose(analysis: &SemanticAnalysis) -> ComponentPurpose {
    if analysis.is_form_related {
        if any_visible_name_contains(analysis, &["button"]) {
            ComponentPurpose::Action
        } else {
            ComponentPurpose::Input
        }
    } else if any_visible_name_contains(analysis, NOTIFICATION_TERMS) {
        ComponentPurpose::Notification
    } else if any_visible_name_contains(analysis, NAVIGATION_TERMS) {
        ComponentPurpose::Navigation
    } else if any_visible_name_contains(analysis, ACTION_TERMS) {
        ComponentPurpose::Action
    } else if analysis.has_slots || analysis.visible_text_props.len() > 2 {
        ComponentPurpose::Container
    } else {
        ComponentPurpose::Display
    }
}

/// Chooses how the basic example picks optional content.
#[must_use]
pub fn determine_content_strategy(analysis: &SemanticAnalysis) -> ContentStrategy {
    if analysis.is_form_related && any_visible_name_contains(analysis, &["label"]) {
        ContentStrategy::FormLabel
    } else if !analysis.visible_text_props.is_empty() {
        ContentStrategy::VisibleFirst
    } else if analysis.has_slots {
        ContentStrategy::StructureFirst
    } else {
        ContentStrategy::Unknown
    }
}
