//! Parser configuration.
//!
//! Controls the naming conventions the extractor looks for, the suggestion
//! limit, and the largest declaration file the CLI will load.
//!
//! # Examples
//!
//! ```
//! use vads_docs_core::ParserConfig;
//!
//! // Use default configuration
//! let config = ParserConfig::default();
//! assert_eq!(config.interface_prefix, "Va");
//! assert_eq!(config.tag_prefix, "va-");
//!
//! // Create custom configuration
//! let custom = ParserConfig {
//!     max_suggestions: 3,
//!     ..Default::default()
//! };
//! assert!(custom.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound on declaration text size (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Upper bound on `max_suggestions`.
pub const MAX_SUGGESTIONS: usize = 5;

/// Configuration for declaration parsing and component lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Prefix every component interface name starts with.
    ///
    /// Default: `Va`
    pub interface_prefix: String,

    /// Prefix prepended to the lower-cased component name to form its tag.
    ///
    /// Default: `va-`
    pub tag_prefix: String,

    /// Maximum number of suggestions returned for an unmatched name.
    ///
    /// Must be between 1 and [`MAX_SUGGESTIONS`]. Default: 5
    pub max_suggestions: usize,

    /// Largest declaration file the CLI loads, in bytes.
    ///
    /// Default: 1 MiB
    pub max_input_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            interface_prefix: "Va".to_string(),
            tag_prefix: "va-".to_string(),
            max_suggestions: MAX_SUGGESTIONS,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::ParserConfig;
    ///
    /// let config = ParserConfig::builder()
    ///     .interface_prefix("Ds")
    ///     .tag_prefix("ds-")
    ///     .build();
    ///
    /// assert_eq!(config.tag_prefix, "ds-");
    /// ```
    #[must_use]
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if:
    /// - The interface prefix is empty or not an identifier
    /// - The tag prefix is empty
    /// - `max_suggestions` is zero or above [`MAX_SUGGESTIONS`]
    /// - `max_input_bytes` is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::ParserConfig;
    ///
    /// let mut invalid = ParserConfig::default();
    /// invalid.tag_prefix.clear();
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.interface_prefix.is_empty()
            || !self
                .interface_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::ConfigError {
                message: format!(
                    "Interface prefix must be a non-empty identifier, got '{}'",
                    self.interface_prefix
                ),
            });
        }

        if self.tag_prefix.is_empty() {
            return Err(Error::ConfigError {
                message: "Tag prefix cannot be empty".to_string(),
            });
        }

        if !(1..=MAX_SUGGESTIONS).contains(&self.max_suggestions) {
            return Err(Error::ConfigError {
                message: format!(
                    "Maximum suggestions must be between 1 and {MAX_SUGGESTIONS}, got {}",
                    self.max_suggestions
                ),
            });
        }

        if self.max_input_bytes == 0 {
            return Err(Error::ConfigError {
                message: "Maximum input size must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Creates a builder seeded with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interface name prefix.
    #[must_use]
    pub fn interface_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.interface_prefix = prefix.into();
        self
    }

    /// Sets the tag prefix.
    #[must_use]
    pub fn tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.tag_prefix = prefix.into();
        self
    }

    /// Sets the suggestion limit.
    #[must_use]
    pub const fn max_suggestions(mut self, limit: usize) -> Self {
        self.config.max_suggestions = limit;
        self
    }

    /// Sets the input size limit.
    #[must_use]
    pub const fn max_input_bytes(mut self, limit: usize) -> Self {
        self.config.max_input_bytes = limit;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ParserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ParserConfig::builder()
            .interface_prefix("Ds")
            .tag_prefix("ds-")
            .max_suggestions(2)
            .max_input_bytes(64)
            .build();

        assert_eq!(config.interface_prefix, "Ds");
        assert_eq!(config.tag_prefix, "ds-");
        assert_eq!(config.max_suggestions, 2);
        assert_eq!(config.max_input_bytes, 64);
    }

    #[test]
    fn test_validate_rejects_bad_interface_prefix() {
        let config = ParserConfig::builder().interface_prefix("Va-").build();
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());

        let config = ParserConfig::builder().interface_prefix("").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        assert!(ParserConfig::builder().max_suggestions(0).build().validate().is_err());
        assert!(ParserConfig::builder().max_input_bytes(0).build().validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_suggestions() {
        let err = ParserConfig::builder()
            .max_suggestions(50)
            .build()
            .validate()
            .unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("between 1 and 5"));

        let at_limit = ParserConfig::builder().max_suggestions(MAX_SUGGESTIONS).build();
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{"tag_prefix": "ds-"}"#).unwrap();
        assert_eq!(config.tag_prefix, "ds-");
        assert_eq!(config.interface_prefix, "Va");
    }
}
