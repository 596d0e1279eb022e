//! Component metadata extraction for VA web component declarations.
//!
//! This crate turns the text of a TypeScript declaration file into a
//! [`ComponentRegistry`](vads_docs_core::ComponentRegistry) and finds
//! components in it by forgiving name lookup.
//!
//! # Architecture
//!
//! The extraction flow:
//! 1. `extractor` - Pairs each component interface with its `JSDoc` metadata block
//! 2. `interface` - Parses property declarations from the interface body
//! 3. `status` - Derives status and recommendation from maturity metadata
//! 4. `matcher` - Resolves free-text names and ranks suggestions
//!
//! # Examples
//!
//! ```
//! use vads_docs_core::ParserConfig;
//! use vads_docs_metadata::{ComponentMatcher, MetadataExtractor};
//!
//! let text = "/** @componentName Button\n * @maturityCategory use\n * @maturityLevel best_practice */\ninterface VaButton { text: string; disabled?: boolean; }";
//!
//! let config = ParserConfig::default();
//! let registry = MetadataExtractor::new(&config)?.extract_components(text);
//! let button = ComponentMatcher::new(&config).find("va-button", &registry).unwrap();
//!
//! assert_eq!(button.properties.len(), 2);
//! # Ok::<(), vads_docs_core::Error>(())
//! ```

mod extractor;
mod interface;
mod matcher;
mod status;

pub use extractor::{MetadataExtractor, build_component_data, derive_tag_name};
pub use interface::parse_interface_properties;
pub use matcher::{COMMON_TERMS, ComponentMatcher, MatchRule, normalize_name, suggestion_score};
pub use status::{
    determine_component_status, determine_component_status_from_tags, recommendation_for,
};
