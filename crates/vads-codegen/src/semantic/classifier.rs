//! Property role classification.
//!
//! Eight independent predicates over a lower-cased property name and type.
//! Roles overlap on purpose: `disabled` is both accessibility and state,
//! `value` is both visible content and form data. The only precedence rule
//! is that accessibility beats visible content, so `aria-label` is never
//! counted as visible text.

use super::vocabulary::{BOOLEAN_TYPE_TERM, Vocabulary, matches_any};
use serde::Serialize;
use vads_docs_core::Property;

/// Every role a single property was tagged with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PropertyRoles {
    /// User-visible text.
    pub visible_content: bool,
    /// Accessibility attribute.
    pub accessibility: bool,
    /// Component state.
    pub state: bool,
    /// Presentation configuration.
    pub config: bool,
    /// Event handler.
    pub event: bool,
    /// Slot.
    pub slot: bool,
    /// Form data or validation.
    pub form_related: bool,
    /// Conditional rendering switch.
    pub conditional: bool,
}

/// Stateless property classifier over a [`Vocabulary`].
///
/// Predicates expect lower-cased input; [`PropertyClassifier::classify`]
/// does the lower-casing for a whole property.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::PropertyClassifier;
/// use vads_docs_core::Property;
///
/// let classifier = PropertyClassifier::default();
/// let roles = classifier.classify(&Property::new("aria-label", "string", true));
///
/// assert!(roles.accessibility);
/// assert!(!roles.visible_content);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyClassifier {
    vocabulary: Vocabulary,
}

impl PropertyClassifier {
    /// Creates a classifier over a custom vocabulary.
    #[must_use]
    pub const fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Returns the vocabulary in use.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Tags one property with all of its roles.
    #[must_use]
    pub fn classify(&self, property: &Property) -> PropertyRoles {
        let name = property.name.to_lowercase();
        let type_text = property.type_text.to_lowercase();

        PropertyRoles {
            visible_content: self.is_visible_content(&name, &type_text),
            accessibility: self.is_accessibility(&name, &type_text),
            state: self.is_state(&name, &type_text),
            config: self.is_config(&name, &type_text),
            event: self.is_event(&name, &type_text),
            slot: self.is_slot(&name, &type_text),
            form_related: self.is_form_related(&name, &type_text),
            conditional: self.is_conditional(&name, &type_text),
        }
    }

    /// Visible text, unless the name is an accessibility attribute.
    #[must_use]
    pub fn is_visible_content(&self, name: &str, type_text: &str) -> bool {
        matches_any(name, self.vocabulary.visible_content)
            && !self.is_accessibility(name, type_text)
    }

    /// Accessibility attribute.
    #[must_use]
    pub fn is_accessibility(&self, name: &str, _type_text: &str) -> bool {
        matches_any(name, self.vocabulary.accessibility)
    }

    /// State term in the name, or any boolean that is not configuration.
    #[must_use]
    pub fn is_state(&self, name: &str, type_text: &str) -> bool {
        matches_any(name, self.vocabulary.state)
            || (type_text.contains(BOOLEAN_TYPE_TERM) && !self.is_config(name, type_text))
    }

    /// Presentation configuration.
    #[must_use]
    pub fn is_config(&self, name: &str, _type_text: &str) -> bool {
        matches_any(name, self.vocabulary.config)
    }

    /// Event handler, recognized by prefix.
    #[must_use]
    pub fn is_event(&self, name: &str, _type_text: &str) -> bool {
        name.starts_with(self.vocabulary.event_prefix)
    }

    /// Slot property.
    #[must_use]
    pub fn is_slot(&self, name: &str, _type_text: &str) -> bool {
        name.contains(self.vocabulary.slot)
    }

    /// Form data or validation property.
    #[must_use]
    pub fn is_form_related(&self, name: &str, _type_text: &str) -> bool {
        matches_any(name, self.vocabulary.form)
    }

    /// Conditional rendering switch.
    #[must_use]
    pub fn is_conditional(&self, name: &str, _type_text: &str) -> bool {
        matches_any(name, self.vocabulary.conditional)
    }
}
