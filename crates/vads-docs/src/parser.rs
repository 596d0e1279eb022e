//! Component parser facade.
//!
//! [`ComponentParser`] wires the extraction, lookup, analysis and example
//! stages together behind one object built by [`ComponentParserFactory`].
//! Every stage is stateless; a parser holds only its configuration and the
//! compiled header pattern, so one instance can be shared across threads.

use tracing::{debug, info};
use vads_docs_codegen::{ExampleGenerator, SemanticAnalysis, SemanticAnalyzer};
use vads_docs_core::{
    ComponentData, ComponentRegistry, ComponentStatus, Error, Example, GenerateOptions,
    ParserConfig, Result,
};
use vads_docs_metadata::{
    ComponentMatcher, MetadataExtractor, determine_component_status_from_tags,
};

/// Builds [`ComponentParser`] instances.
///
/// # Examples
///
/// ```
/// use vads_docs::ComponentParserFactory;
///
/// let parser = ComponentParserFactory::create()?;
/// assert_eq!(parser.config().tag_prefix, "va-");
/// # Ok::<(), vads_docs_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentParserFactory;

impl ComponentParserFactory {
    /// Creates a parser with the default VA naming conventions.
    ///
    /// # Errors
    ///
    /// Returns error if the default configuration fails validation, which
    /// only happens if the defaults themselves are broken.
    pub fn create() -> Result<ComponentParser> {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs::ComponentParserFactory;
    /// use vads_docs_core::ParserConfig;
    ///
    /// let config = ParserConfig::builder().tag_prefix("").build();
    /// let err = ComponentParserFactory::with_config(config).unwrap_err();
    /// assert!(err.is_config_error());
    /// ```
    pub fn with_config(config: ParserConfig) -> Result<ComponentParser> {
        let extractor = MetadataExtractor::new(&config)?;
        let matcher = ComponentMatcher::new(&config);

        debug!(
            interface_prefix = %config.interface_prefix,
            tag_prefix = %config.tag_prefix,
            "component parser created"
        );

        Ok(ComponentParser {
            config,
            extractor,
            matcher,
            analyzer: SemanticAnalyzer::default(),
            generator: ExampleGenerator::default(),
        })
    }
}

/// Parses declaration files and produces component documentation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`. No method mutates the parser.
///
/// # Examples
///
/// ```
/// use vads_docs::ComponentParserFactory;
/// use vads_docs_core::{ComponentStatus, GenerateOptions};
///
/// let text = "/** @componentName Button\n * @maturityCategory use\n * @maturityLevel best_practice */\ninterface VaButton { text: string; disabled?: boolean; }";
///
/// let parser = ComponentParserFactory::create()?;
/// let components = parser.parse_component_metadata(text);
/// let button = parser.find_component_by_name("button", &components).unwrap();
///
/// assert_eq!(button.status, ComponentStatus::Recommended);
///
/// let examples = parser.generate_examples(button, &GenerateOptions::default());
/// assert!(examples[0].code.contains("va-button"));
/// # Ok::<(), vads_docs_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComponentParser {
    config: ParserConfig,
    extractor: MetadataExtractor,
    matcher: ComponentMatcher,
    analyzer: SemanticAnalyzer,
    generator: ExampleGenerator,
}

impl ComponentParser {
    /// Returns the configuration this parser was built with.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extracts every annotated component from declaration text.
    ///
    /// Interfaces without complete metadata are skipped, never reported.
    #[must_use]
    pub fn parse_component_metadata(&self, text: &str) -> ComponentRegistry {
        let registry = self.extractor.extract_components(text);
        info!(
            components = registry.len(),
            bytes = text.len(),
            "parsed component metadata"
        );
        registry
    }

    /// Finds a component by a loosely written name.
    #[must_use]
    pub fn find_component_by_name<'r>(
        &self,
        name: &str,
        components: &'r ComponentRegistry,
    ) -> Option<&'r ComponentData> {
        self.matcher.find(name, components)
    }

    /// Finds a component, reporting a miss as an error that lists suggestions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if no component matches.
    pub fn require_component<'r>(
        &self,
        name: &str,
        components: &'r ComponentRegistry,
    ) -> Result<&'r ComponentData> {
        self.find_component_by_name(name, components)
            .ok_or_else(|| {
                let suggestions = self.get_suggested_component_names(name, components);
                let resource = if suggestions.is_empty() {
                    format!("component '{name}'")
                } else {
                    format!(
                        "component '{name}' (did you mean: {}?)",
                        suggestions.join(", ")
                    )
                };
                Error::ResourceNotFound { resource }
            })
    }

    /// Ranks component names similar to `name`.
    #[must_use]
    pub fn get_suggested_component_names(
        &self,
        name: &str,
        components: &ComponentRegistry,
    ) -> Vec<String> {
        self.matcher.suggest(name, components)
    }

    /// Classifies the component's properties and infers its purpose.
    #[must_use]
    pub fn analyze_component(&self, component: &ComponentData) -> SemanticAnalysis {
        self.analyzer.analyze(&component.properties)
    }

    /// Generates every applicable example, ignoring `options.example_types`.
    #[must_use]
    pub fn generate_examples(
        &self,
        component: &ComponentData,
        options: &GenerateOptions,
    ) -> Vec<Example> {
        self.generator.generate_examples(component, options)
    }

    /// Generates examples and keeps only the types `options` asks for.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs::ComponentParserFactory;
    /// use vads_docs_core::{ExampleType, GenerateOptions};
    ///
    /// let text = "/** @componentName Button\n * @maturityCategory use\n * @maturityLevel deployed */\ninterface VaButton { text: string; disabled?: boolean; }";
    /// let parser = ComponentParserFactory::create()?;
    /// let components = parser.parse_component_metadata(text);
    /// let button = components.get("Button").unwrap();
    ///
    /// let options = GenerateOptions {
    ///     example_types: vec![ExampleType::State],
    ///     ..GenerateOptions::default()
    /// };
    /// let examples = parser.generate_filtered_examples(button, &options);
    /// assert_eq!(examples.len(), 1);
    /// assert_eq!(examples[0].title, "State Variations");
    /// # Ok::<(), vads_docs_core::Error>(())
    /// ```
    #[must_use]
    pub fn generate_filtered_examples(
        &self,
        component: &ComponentData,
        options: &GenerateOptions,
    ) -> Vec<Example> {
        self.generate_examples(component, options)
            .into_iter()
            .filter(|example| options.wants(example.purpose))
            .collect()
    }

    /// Derives a status from raw maturity tag values.
    #[must_use]
    #[allow(clippy::unused_self)] // Part of the parser's method surface
    pub fn determine_component_status(&self, category: &str, level: &str) -> ComponentStatus {
        determine_component_status_from_tags(category, level)
    }

    /// Returns the components with `status`, in file order.
    #[must_use]
    #[allow(clippy::unused_self)] // Part of the parser's method surface
    pub fn components_by_status<'r>(
        &self,
        components: &'r ComponentRegistry,
        status: ComponentStatus,
    ) -> Vec<&'r ComponentData> {
        components
            .iter()
            .filter(|component| component.status == status)
            .collect()
    }
}
