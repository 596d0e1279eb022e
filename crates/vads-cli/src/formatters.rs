//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text, and pretty output modes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use vads_docs_core::cli::OutputFormat;

/// Format data according to the specified output format.
///
/// # Arguments
///
/// * `data` - The data to format (must be serializable)
/// * `format` - The output format (Json, Text, Pretty)
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use vads_docs_cli::formatters::format_output;
/// use vads_docs_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     name: String,
///     tag_name: String,
/// }
///
/// let summary = Summary {
///     name: "Button".to_string(),
///     tag_name: "va-button".to_string(),
/// };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"tag_name\""));
///
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "name: Button\ntag_name: va-button");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON.
    ///
    /// Uses pretty-printing with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::Value;

    /// Format data as indented `key: value` lines without colors.
    ///
    /// Multi-line strings such as example markup are written as an indented
    /// block under their key, so the markup can be copied as-is.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&value, 0, &mut out);
        Ok(out.trim_end().to_string())
    }

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.contains('\n') => Some(s.clone()),
            Value::Array(items) if items.is_empty() => Some("[]".to_string()),
            Value::Object(map) if map.is_empty() => Some("{}".to_string()),
            _ => None,
        }
    }

    fn write_value(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, item) in map {
                    if let Some(text) = scalar(item) {
                        out.push_str(&format!("{pad}{key}: {text}\n"));
                    } else {
                        out.push_str(&format!("{pad}{key}:\n"));
                        write_value(item, indent + 1, out);
                    }
                }
            }
            Value::Array(items) if !items.is_empty() => {
                for item in items {
                    if let Some(text) = scalar(item) {
                        out.push_str(&format!("{pad}- {text}\n"));
                    } else {
                        out.push_str(&format!("{pad}-\n"));
                        write_value(item, indent + 1, out);
                    }
                }
            }
            Value::String(s) => {
                for line in s.lines() {
                    out.push_str(&format!("{pad}{line}\n"));
                }
            }
            other => {
                if let Some(text) = scalar(other) {
                    out.push_str(&format!("{pad}{text}\n"));
                }
            }
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};

    /// Format data as colorized, human-readable output.
    ///
    /// Uses colors and formatting for better terminal readability.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(format_value(&value, 0))
    }

    /// Recursively format a JSON value with colors and indentation.
    fn format_value(value: &serde_json::Value, indent: usize) -> String {
        use serde_json::Value;

        let indent_str = "  ".repeat(indent);
        let next_indent_str = "  ".repeat(indent + 1);

        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) if s.contains('\n') => {
                // Markup reads better as a block than as an escaped string.
                let mut result = "|".dimmed().to_string();
                for line in s.lines() {
                    result.push('\n');
                    result.push_str(&next_indent_str);
                    result.push_str(&line.green().to_string());
                }
                result
            }
            Value::String(s) => format!("\"{}\"", s.green()),
            Value::Array(arr) => {
                if arr.is_empty() {
                    return "[]".to_string();
                }

                let mut result = "[\n".to_string();
                for (i, item) in arr.iter().enumerate() {
                    result.push_str(&next_indent_str);
                    result.push_str(&format_value(item, indent + 1));
                    if i < arr.len() - 1 {
                        result.push(',');
                    }
                    result.push('\n');
                }
                result.push_str(&indent_str);
                result.push(']');
                result
            }
            Value::Object(obj) => {
                if obj.is_empty() {
                    return "{}".to_string();
                }

                let mut result = "{\n".to_string();
                for (i, (key, val)) in obj.iter().enumerate() {
                    result.push_str(&next_indent_str);
                    result.push_str(&format!("\"{}\": ", key.blue().bold()));
                    result.push_str(&format_value(val, indent + 1));
                    if i < obj.len() - 1 {
                        result.push(',');
                    }
                    result.push('\n');
                }
                result.push_str(&indent_str);
                result.push('}');
                result
            }
        }
    }
}
