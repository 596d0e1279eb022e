//! Semantic analysis and usage-example synthesis for VA web components.
//!
//! Given a parsed [`ComponentData`](vads_docs_core::ComponentData), this
//! crate classifies its properties, infers what the component is for, and
//! writes realistic markup examples.
//!
//! # Architecture
//!
//! The generation flow:
//! 1. `semantic` - Tags properties with overlapping roles and infers purpose
//! 2. `synthesis` - Picks attribute values, detects composites, renders examples
//!
//! # Examples
//!
//! ```
//! use vads_docs_codegen::{ExampleGenerator, SemanticAnalyzer};
//! use vads_docs_core::{ComponentData, ComponentStatus, GenerateOptions, MaturityCategory, MaturityLevel, Property};
//!
//! let component = ComponentData {
//!     name: "Alert".to_string(),
//!     tag_name: "va-alert".to_string(),
//!     status: ComponentStatus::Stable,
//!     maturity_category: MaturityCategory::Use,
//!     maturity_level: MaturityLevel::Deployed,
//!     recommendation: String::new(),
//!     guidance_href: None,
//!     translations: vec![],
//!     properties: vec![
//!         Property::new("headline", "string", false),
//!         Property::new("status", "'info' | 'warning'", true),
//!     ],
//! };
//!
//! let analysis = SemanticAnalyzer::default().analyze(&component.properties);
//! assert!(analysis.required_props.iter().any(|p| p.name == "headline"));
//!
//! let examples = ExampleGenerator::default().generate_examples(&component, &GenerateOptions::default());
//! assert_eq!(examples[0].title, "Basic Usage");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod semantic;
pub mod synthesis;

pub use semantic::{
    ComponentPurpose, ContentStrategy, PropertyClassifier, SemanticAnalysis, SemanticAnalyzer,
};
pub use synthesis::{CompositeInfo, CompositeKind, ExampleGenerator, ValueGenerator};
