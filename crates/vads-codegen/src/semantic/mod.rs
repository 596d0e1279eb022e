//! Semantic analysis of component properties.
//!
//! Properties are tagged with overlapping roles by substring vocabularies,
//! then the tagged lists drive purpose and content strategy inference.

mod analyzer;
mod classifier;
mod purpose;
mod vocabulary;

pub use analyzer::{SemanticAnalysis, SemanticAnalyzer};
pub use classifier::{PropertyClassifier, PropertyRoles};
pub use purpose::{ComponentPurpose, ContentStrategy, determine_content_strategy, infer_purpose};
pub use vocabulary::{
    ACCESSIBILITY_TERMS, BOOLEAN_TYPE_TERM, CONDITIONAL_TERMS, CONFIG_TERMS, EVENT_PREFIX,
    FORM_TERMS, SLOT_TERM, STATE_TERMS, VISIBLE_CONTENT_TERMS, Vocabulary, matches_any,
};
