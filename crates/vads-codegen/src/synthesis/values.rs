//! Plausible example values for component properties.
//!
//! Values come from four sources tried in order: array literals, union
//! literals, a table keyed by component purpose, and finally a fallback by
//! type keyword. Every table here is fixed so example output is
//! reproducible byte for byte.

use crate::semantic::{ComponentPurpose, PropertyClassifier, SemanticAnalysis};
use vads_docs_core::Property;

/// Array literal for breadcrumb-like properties.
pub const BREADCRUMB_LIST: &str =
    r#"[{"href":"/","label":"VA.gov home"},{"href":"/benefits","label":"Benefits"}]"#;

/// Array literal for option-like properties.
pub const OPTION_LIST: &str = r#"["Option 1","Option 2","Option 3"]"#;

/// Value of string accessibility and label properties with no better source.
pub const SCREEN_READER_TEXT: &str = "Descriptive text for screen readers";

/// Curated values per purpose, as `(property name, value)`.
///
/// Keys are matched against the lower-cased property name, first exactly
/// and then as a substring, in table order.
pub const PURPOSE_VALUES: &[(ComponentPurpose, &[(&str, &str)])] = &[
    (
        ComponentPurpose::Action,
        &[
            ("text", "Submit Application"),
            ("label", "Submit Application"),
        ],
    ),
    (
        ComponentPurpose::Input,
        &[
            ("label", "Email Address"),
            ("hint", "Enter the email address you use to sign in"),
            ("placeholder", "name@example.com"),
            ("error", "Enter a valid email address"),
            ("name", "email"),
        ],
    ),
    (
        ComponentPurpose::Notification,
        &[
            ("headline", "Your application has been submitted"),
            (
                "text",
                "We will review your application and contact you within 5 business days.",
            ),
            (
                "message",
                "We will review your application and contact you within 5 business days.",
            ),
            (
                "content",
                "We will review your application and contact you within 5 business days.",
            ),
        ],
    ),
    (
        ComponentPurpose::Navigation,
        &[
            ("text", "Go to VA.gov"),
            ("href", "https://www.va.gov"),
            ("label", "VA.gov home"),
        ],
    ),
    (
        ComponentPurpose::Container,
        &[
            ("headline", "Benefits Overview"),
            ("header", "Benefits Overview"),
            ("title", "Benefits Overview"),
        ],
    ),
    (
        ComponentPurpose::Display,
        &[
            ("text", "Veterans Benefits"),
            ("headline", "Veterans Benefits"),
        ],
    ),
];

/// Curated string values by exact lower-cased property name.
pub const STRING_DEFAULTS: &[(&str, &str)] = &[
    ("text", "Example text"),
    ("headline", "Important information"),
    ("status", "info"),
    ("href", "https://www.va.gov"),
    ("hint", "This is a helpful hint"),
    ("message", "This is an informational message"),
    ("description", "A short description"),
    ("placeholder", "Enter a value"),
    ("name", "example-field"),
    ("value", "example-value"),
    ("error", "This field is required"),
];

/// Generates example attribute values.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::semantic::SemanticAnalyzer;
/// use vads_docs_codegen::synthesis::ValueGenerator;
/// use vads_docs_core::Property;
///
/// let properties = [
///     Property::new("label", "string", false),
///     Property::new("name", "string", false),
/// ];
/// let analysis = SemanticAnalyzer::default().analyze(&properties);
/// let values = ValueGenerator::default();
///
/// assert_eq!(
///     values.generate_contextual_value(&properties[0], &analysis).as_deref(),
///     Some("Email Address")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueGenerator {
    classifier: PropertyClassifier,
}

impl ValueGenerator {
    /// Creates a generator that recognizes accessibility names with `classifier`.
    #[must_use]
    pub const fn new(classifier: PropertyClassifier) -> Self {
        Self { classifier }
    }

    /// Returns a value for `property`, or `None` when its type has no
    /// recognizable keyword (function types, `any`, bare identifiers).
    #[must_use]
    pub fn generate_contextual_value(
        &self,
        property: &Property,
        analysis: &SemanticAnalysis,
    ) -> Option<String> {
        let name = property.name.to_lowercase();
        let type_text = property.type_text.trim().to_lowercase();

        if is_array_type(&type_text) {
            return Some(array_value(&name).to_string());
        }
        if type_text.contains('|')
            && let Some(literal) = first_union_literal(&property.type_text)
        {
            return Some(literal);
        }
        if takes_curated_text(&type_text)
            && let Some(value) = purpose_value(analysis.inferred_purpose, &name)
        {
            return Some(value.to_string());
        }
        self.type_keyword_value(&name, &type_text, &property.name)
    }

    fn type_keyword_value(&self, name: &str, type_text: &str, original: &str) -> Option<String> {
        if type_text.contains("boolean") {
            Some("true".to_string())
        } else if type_text.contains("number") {
            Some(number_value(name).to_string())
        } else if type_text.contains("object") || type_text.starts_with('{') {
            Some("{}".to_string())
        } else if type_text.contains("string") {
            Some(self.string_value(name, type_text, original))
        } else {
            None
        }
    }

    fn string_value(&self, name: &str, type_text: &str, original: &str) -> String {
        if self.classifier.is_accessibility(name, type_text) || name.contains("label") {
            return SCREEN_READER_TEXT.to_string();
        }
        STRING_DEFAULTS
            .iter()
            .find(|(key, _)| *key == name)
            .map_or_else(|| format!("Example {original}"), |(_, value)| (*value).to_string())
    }
}

/// Curated purpose values are prose; flags and numbers skip them.
fn takes_curated_text(type_text: &str) -> bool {
    !type_text.contains("boolean") && !type_text.contains("number")
}

fn is_array_type(type_text: &str) -> bool {
    type_text.ends_with("[]") || type_text.starts_with("array<")
}

fn array_value(name: &str) -> &'static str {
    if name.contains("breadcrumb") {
        BREADCRUMB_LIST
    } else if name.contains("option") {
        OPTION_LIST
    } else {
        "[]"
    }
}

fn number_value(name: &str) -> &'static str {
    if name.contains("level") {
        "2"
    } else if name.contains("timeout") {
        "5000"
    } else {
        "1"
    }
}

/// Returns the first literal member of a union type, quotes stripped.
///
/// Only quoted strings, numbers and `true`/`false` count as literals;
/// `undefined`, empty members and bare type names are skipped.
///
/// # Examples
///
/// ```
/// use vads_docs_codegen::synthesis::first_union_literal;
///
/// assert_eq!(first_union_literal("'info' | 'warning'").as_deref(), Some("info"));
/// assert_eq!(first_union_literal("undefined | 2 | 3").as_deref(), Some("2"));
/// assert_eq!(first_union_literal("string | undefined"), None);
/// ```
#[must_use]
pub fn first_union_literal(type_text: &str) -> Option<String> {
    type_text
        .split('|')
        .map(str::trim)
        .filter(|member| !member.is_empty() && *member != "undefined")
        .find_map(literal_value)
}

fn literal_value(member: &str) -> Option<String> {
    for quote in ['\'', '"', '`'] {
        if member.len() >= 2 && member.starts_with(quote) && member.ends_with(quote) {
            return Some(member[1..member.len() - 1].to_string());
        }
    }
    if member == "true" || member == "false" || member.parse::<f64>().is_ok() {
        return Some(member.to_string());
    }
    None
}

fn purpose_value(purpose: ComponentPurpose, name: &str) -> Option<&'static str> {
    let (_, table) = PURPOSE_VALUES.iter().find(|(p, _)| *p == purpose)?;
    table
        .iter()
        .find(|(key, _)| *key == name)
        .or_else(|| table.iter().find(|(key, _)| name.contains(key)))
        .map(|(_, value)| *value)
}
