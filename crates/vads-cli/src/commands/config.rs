//! Config command implementation.
//!
//! Manages the CLI configuration file.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/vads-docs/config.toml`
//! - macOS: `~/Library/Application Support/vads-docs/config.toml`
//! - Windows: `%APPDATA%\vads-docs\config.toml`
//!
//! `--config <PATH>` or `VADS_DOCS_CONFIG` points the CLI at another file.

use crate::actions::ConfigAction;
use crate::commands::common::print_output;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vads_docs_core::ParserConfig;
use vads_docs_core::cli::{ExitCode, OutputFormat};

const VALID_FORMATS: [&str; 3] = ["json", "text", "pretty"];
const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_format = "pretty"
/// log_level = "info"
///
/// [parser]
/// interface_prefix = "Va"
/// tag_prefix = "va-"
/// max_suggestions = 5
/// max_input_bytes = 1048576
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Declaration parsing and lookup settings
    #[serde(default)]
    pub parser: ParserConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format (json, text, pretty)
    pub default_format: String,

    /// Logging level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: "pretty".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a general setting is not one of its allowed
    /// values or the `[parser]` section fails validation.
    pub fn validate(&self) -> Result<()> {
        if !VALID_FORMATS.contains(&self.general.default_format.as_str()) {
            anyhow::bail!(
                "invalid default_format '{}', must be one of: {}",
                self.general.default_format,
                VALID_FORMATS.join(", ")
            );
        }

        if !VALID_LEVELS.contains(&self.general.log_level.as_str()) {
            anyhow::bail!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                VALID_LEVELS.join(", ")
            );
        }

        self.parser
            .validate()
            .context("invalid [parser] configuration")?;

        Ok(())
    }

    /// Returns the configured default output format.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_format` is not a known format.
    pub fn default_format(&self) -> Result<OutputFormat> {
        self.general
            .default_format
            .parse()
            .context("invalid default_format")
    }
}

/// Resolves the configuration file path.
///
/// An explicit path wins; otherwise the platform config directory is used.
///
/// # Errors
///
/// Returns an error if no explicit path is given and the platform config
/// directory cannot be determined.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("vads-docs").join("config.toml"))
}

/// Loads configuration from `path`, or returns defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// validation.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    config.validate()?;

    Ok(config)
}

/// Saves configuration to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if validation, serialization or the write fails.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    let toml_str = toml::to_string_pretty(config).context("failed to serialize config")?;

    fs::write(path, toml_str).context("failed to write config file")?;

    debug!("Saved config to {}", path.display());

    Ok(())
}

/// Initialization result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a file was written
    pub success: bool,
    /// Status message
    pub message: String,
    /// Configuration file path
    pub path: String,
}

/// Configuration file location.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Configuration file path
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
}

/// Writes a default configuration file.
///
/// An existing file is left untouched unless `force` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init_config(path: &Path, force: bool) -> Result<InitResult> {
    if path.exists() && !force {
        return Ok(InitResult {
            success: false,
            message: "configuration file already exists (use --force to overwrite)".to_string(),
            path: path.display().to_string(),
        });
    }

    save_config(&Config::default(), path)?;

    Ok(InitResult {
        success: true,
        message: "configuration file created with default values".to_string(),
        path: path.display().to_string(),
    })
}

/// Runs the config command.
///
/// # Arguments
///
/// * `action` - Configuration action to perform
/// * `config` - Configuration already loaded for this invocation
/// * `path` - Resolved configuration file path
/// * `output_format` - Output format (json, text, pretty)
///
/// # Errors
///
/// Returns an error if the configuration operation fails.
pub async fn run(
    action: ConfigAction,
    config: &Config,
    path: &Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Config action: {:?}", action);

    match action {
        ConfigAction::Init { force } => {
            let result = init_config(path, force)?;
            print_output(&result, output_format)?;
        }
        ConfigAction::Show => print_output(config, output_format)?,
        ConfigAction::Path => {
            let location = ConfigLocation {
                path: path.display().to_string(),
                exists: path.exists(),
            };
            print_output(&location, output_format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
