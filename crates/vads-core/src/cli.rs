//! CLI-facing types.
//!
//! Strong types for output selection and process exit status, so command
//! handlers never pass raw strings or integers around.
//!
//! # Examples
//!
//! ```
//! use vads_docs_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//!
//! assert!(ExitCode::SUCCESS.is_success());
//! assert_eq!(ExitCode::NOT_FOUND.to_string(), "3");
//! ```

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON
    Json,
    /// Uncolored `key: value` lines
    Text,
    /// Colored, indented output for terminals
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the name accepted by `--format`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// Process exit status.
///
/// Scripts distinguish "the component does not exist" (3) from bad input (2)
/// and every other failure (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Command completed.
    pub const SUCCESS: Self = Self(0);

    /// Unexpected failure, e.g. an unreadable file.
    pub const ERROR: Self = Self(1);

    /// Rejected input: bad arguments, oversize declarations, bad config values.
    pub const INVALID_INPUT: Self = Self(2);

    /// No component matched the requested name.
    pub const NOT_FOUND: Self = Self(3);

    /// Picks the exit status that describes `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vads_docs_core::Error;
    /// use vads_docs_core::cli::ExitCode;
    ///
    /// let err = Error::ValidationError {
    ///     field: "declaration_text".to_string(),
    ///     reason: "too large".to_string(),
    /// };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn for_error(error: &Error) -> Self {
        match error {
            Error::ResourceNotFound { .. } => Self::NOT_FOUND,
            Error::InvalidArgument(_) | Error::ValidationError { .. } | Error::ConfigError { .. } => {
                Self::INVALID_INPUT
            }
            Error::SerializationError { .. } => Self::ERROR,
        }
    }

    /// Returns the numeric status passed to `std::process::exit`.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for [`ExitCode::SUCCESS`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
