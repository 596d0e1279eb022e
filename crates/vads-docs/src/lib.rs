//! VA component documentation pipeline.
//!
//! Parses the TypeScript declaration file of the VA design system's web
//! components and turns each annotated interface into structured component
//! data, forgiving name lookup, semantic analysis and usage examples.
//!
//! # Overview
//!
//! Everything is reached through a [`ComponentParser`] built by
//! [`ComponentParserFactory`]. The pipeline is synchronous and pure: no
//! I/O, no caches, no state carried between calls. Malformed input
//! degrades to fewer components or properties, never to an error; the only
//! fallible steps are configuration validation and the input size limit.
//!
//! # Architecture
//!
//! - `vads-docs-core` - Component model, closed enums, errors, configuration
//! - `vads-docs-metadata` - Extraction, interface parsing, name matching, status
//! - `vads-docs-codegen` - Property classification, purpose inference, examples
//!
//! # Examples
//!
//! ```
//! use vads_docs::ComponentParserFactory;
//! use vads_docs_core::GenerateOptions;
//!
//! let text = r"
//! /**
//!  * @componentName File input multiple
//!  * @maturityCategory use
//!  * @maturityLevel candidate
//!  */
//! interface VaFileInputMultiple {
//!   label?: string;
//!   name?: string;
//! }
//! ";
//!
//! let parser = ComponentParserFactory::create()?;
//! let components = parser.parse_component_metadata(text);
//!
//! let component = parser
//!     .find_component_by_name("file-input-multiple", &components)
//!     .unwrap();
//! assert_eq!(component.tag_name, "va-file-input-multiple");
//!
//! for example in parser.generate_examples(component, &GenerateOptions::default()) {
//!     println!("{}\n{}", example.title, example.code);
//! }
//! # Ok::<(), vads_docs_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod parser;

pub use parser::{ComponentParser, ComponentParserFactory};

pub use vads_docs_codegen::{
    ComponentPurpose, CompositeInfo, CompositeKind, ContentStrategy, SemanticAnalysis,
};
pub use vads_docs_core::{
    ComponentData, ComponentRegistry, ComponentStatus, Error, Example, ExampleType,
    GenerateOptions, ParserConfig, Property, Result,
};
