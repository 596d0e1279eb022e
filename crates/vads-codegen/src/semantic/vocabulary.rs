//! Fixed vocabularies for property classification.
//!
//! Every role is recognized by substring match against one of these
//! tables. They are data, not logic: a [`Vocabulary`] can be swapped out
//! wholesale for tests or for a design system with different conventions.

/// Substrings marking a property as user-visible text.
pub const VISIBLE_CONTENT_TERMS: &[&str] = &[
    "text",
    "label",
    "headline",
    "title",
    "message",
    "content",
    "description",
    "placeholder",
    "value",
    "children",
    "header",
    "footer",
    "caption",
    "summary",
    "detail",
];

/// Substrings marking a property as accessibility-related.
pub const ACCESSIBILITY_TERMS: &[&str] = &[
    "aria-",
    "role",
    "tabindex",
    "alt",
    "title",
    "describedby",
    "labelledby",
    "live",
    "atomic",
    "relevant",
    "busy",
    "disabled",
    "readonly",
];

/// Substrings marking a property as component state.
pub const STATE_TERMS: &[&str] = &[
    "disabled",
    "loading",
    "error",
    "success",
    "warning",
    "active",
    "selected",
    "checked",
    "expanded",
    "collapsed",
    "visible",
    "hidden",
    "open",
    "closed",
    "focused",
];

/// Substrings marking a property as presentation configuration.
pub const CONFIG_TERMS: &[&str] = &[
    "size",
    "variant",
    "theme",
    "color",
    "type",
    "format",
    "layout",
    "position",
    "align",
    "direction",
    "orientation",
];

/// Substrings marking a property as form-related.
pub const FORM_TERMS: &[&str] = &[
    "name",
    "value",
    "required",
    "validation",
    "error",
    "invalid",
    "valid",
    "pattern",
    "min",
    "max",
    "step",
    "multiple",
    "accept",
    "autocomplete",
];

/// Substrings marking a property as controlling conditional rendering.
pub const CONDITIONAL_TERMS: &[&str] = &["show", "hide", "if", "when", "unless", "conditional"];

/// Name prefix of event handler properties.
pub const EVENT_PREFIX: &str = "on";

/// Substring marking a property as a slot.
pub const SLOT_TERM: &str = "slot";

/// Type substring that makes an otherwise unclassified property a state flag.
pub const BOOLEAN_TYPE_TERM: &str = "boolean";

/// The complete set of tables a classifier consults.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::Vocabulary;
///
/// let vocabulary = Vocabulary::default();
/// assert!(vocabulary.state.contains(&"expanded"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    /// Visible-content substrings.
    pub visible_content: &'static [&'static str],
    /// Accessibility substrings.
    pub accessibility: &'static [&'static str],
    /// State substrings.
    pub state: &'static [&'static str],
    /// Configuration substrings.
    pub config: &'static [&'static str],
    /// Form substrings.
    pub form: &'static [&'static str],
    /// Conditional-rendering substrings.
    pub conditional: &'static [&'static str],
    /// Event handler prefix.
    pub event_prefix: &'static str,
    /// Slot substring.
    pub slot: &'static str,
}

impl Vocabulary {
    /// The VA design system vocabulary.
    pub const VA: Self = Self {
        visible_content: VISIBLE_CONTENT_TERMS,
        accessibility: ACCESSIBILITY_TERMS,
        state: STATE_TERMS,
        config: CONFIG_TERMS,
        form: FORM_TERMS,
        conditional: CONDITIONAL_TERMS,
        event_prefix: EVENT_PREFIX,
        slot: SLOT_TERM,
    };
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::VA
    }
}

/// Returns `true` if `haystack` contains any term of `table`.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::{matches_any, STATE_TERMS};
///
/// assert!(matches_any("is-expanded", STATE_TERMS));
/// assert!(!matches_any("href", STATE_TERMS));
/// ```
#[must_use]
pub fn matches_any(haystack: &str, table: &[&str]) -> bool {
    table.iter().any(|term| haystack.contains(term))
}
