//! Error types for VA component documentation tooling.
//!
//! The parsing and example pipeline degrades gracefully on malformed input
//! and never fails on content. Errors exist only at the boundaries: invalid
//! configuration, oversize input, bad CLI arguments, and serialization.
//!
//! # Examples
//!
//! ```
//! use vads_docs_core::{Error, Result};
//!
//! fn require_prefix(prefix: &str) -> Result<()> {
//!     if prefix.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Tag prefix cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_prefix("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Errors raised at the edges of the documentation pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// A named component is not in the parsed declaration file.
    #[error("Resource not found: {resource}")]
    ResourceNotFound {
        /// Identifier of the missing resource
        resource: String,
    },

    /// A [`ParserConfig`](crate::ParserConfig) value is unusable, e.g. an
    /// empty tag prefix.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Which setting is wrong and why
        message: String,
    },

    /// JSON encoding of a registry or example failed.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Rendered serde error
        message: String,
        /// Original serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A string could not be parsed into a closed enum such as
    /// `ExampleType` or `OutputFormat`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input violates a bound, e.g. a declaration file over `max_input_bytes`.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// Name of the rejected input
        field: String,
        /// What bound was exceeded
        reason: String,
    },
}

impl Error {
    /// Returns `true` when a component lookup missed.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::Error;
    ///
    /// let err = Error::ResourceNotFound {
    ///     resource: "component:Button".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Returns `true` when a configuration value was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid prefix".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` when input exceeded a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "declaration".to_string(),
    ///     reason: "too large".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// `Result` with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_exclusive() {
        let errors = [
            Error::ResourceNotFound {
                resource: "component 'carousel'".to_string(),
            },
            Error::ConfigError {
                message: "Tag prefix cannot be empty".to_string(),
            },
            Error::ValidationError {
                field: "declaration_text".to_string(),
                reason: "input is 2 bytes, limit is 1 bytes".to_string(),
            },
        ];
        let flags: Vec<[bool; 3]> = errors
            .iter()
            .map(|e| [e.is_not_found(), e.is_config_error(), e.is_validation_error()])
            .collect();
        assert_eq!(
            flags,
            [
                [true, false, false],
                [false, true, false],
                [false, false, true]
            ]
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::ValidationError {
            field: "declaration_text".to_string(),
            reason: "input is 2097152 bytes, limit is 1048576 bytes".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Validation error in declaration_text: input is 2097152 bytes, limit is 1048576 bytes"
        );
    }

    #[test]
    fn test_from_serde_json_keeps_source() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("Serialization error: "));
        assert!(err.source().is_some());
    }
}
