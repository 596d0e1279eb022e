//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vads_docs_core::{ComponentStatus, ExampleType};

use crate::actions::ConfigAction;

/// VA design system component documentation.
///
/// Reads a Stencil `components.d.ts` declaration file, lists the documented
/// components and generates usage examples for them.
#[derive(Parser, Debug)]
#[command(name = "vads-docs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty); defaults to the configured format
    #[arg(long = "format", global = true)]
    pub format: Option<String>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", global = true, env = "VADS_DOCS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every documented component in a declaration file.
    ///
    /// # Examples
    ///
    /// ```bash
    /// vads-docs components dist/types/components.d.ts
    ///
    /// # Only components that are safe to adopt
    /// vads-docs components components.d.ts --status recommended
    /// ```
    Components {
        /// Path to the declaration file
        file: PathBuf,

        /// Only list components with this status (e.g. recommended, stable)
        #[arg(long)]
        status: Option<ComponentStatus>,
    },

    /// Look up one component by name, kebab-case name or tag.
    ///
    /// Prints suggestions and exits with status 3 when nothing matches.
    Find {
        /// Path to the declaration file
        file: PathBuf,

        /// Component name, e.g. "file-input-multiple" or "va-button"
        name: String,
    },

    /// Suggest component names similar to the given text.
    Suggest {
        /// Path to the declaration file
        file: PathBuf,

        /// Free-text component name
        name: String,
    },

    /// Classify a component's properties and show its inferred purpose.
    Analyze {
        /// Path to the declaration file
        file: PathBuf,

        /// Component name, kebab-case name or tag
        name: String,
    },

    /// Generate usage examples for a component.
    ///
    /// # Examples
    ///
    /// ```bash
    /// vads-docs examples components.d.ts text-input
    ///
    /// # Only the basic and form examples, as JSON
    /// vads-docs --format json examples components.d.ts text-input \
    ///     --type basic --type form
    /// ```
    Examples {
        /// Path to the declaration file
        file: PathBuf,

        /// Component name, kebab-case name or tag
        name: String,

        /// Example type to keep (basic, state, accessibility, form); repeatable
        #[arg(long = "type", value_name = "TYPE", num_args = 1)]
        types: Vec<ExampleType>,

        /// Language tag attached to each example's code
        #[arg(long, default_value = "html")]
        framework: String,

        /// Omit example descriptions from the output
        #[arg(long)]
        no_description: bool,
    },

    /// Manage the CLI configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_components() {
        let cli = Cli::parse_from(["vads-docs", "components", "components.d.ts"]);
        if let Commands::Components { file, status } = cli.command {
            assert_eq!(file, PathBuf::from("components.d.ts"));
            assert_eq!(status, None);
        } else {
            panic!("Expected Components command");
        }
    }

    #[test]
    fn test_cli_parsing_components_status() {
        let cli = Cli::parse_from([
            "vads-docs",
            "components",
            "components.d.ts",
            "--status",
            "use-with-caution",
        ]);
        if let Commands::Components { status, .. } = cli.command {
            assert_eq!(status, Some(ComponentStatus::UseWithCaution));
        } else {
            panic!("Expected Components command");
        }
    }

    #[test]
    fn test_cli_parsing_invalid_status() {
        let result = Cli::try_parse_from([
            "vads-docs",
            "components",
            "components.d.ts",
            "--status",
            "shiny",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_find() {
        let cli = Cli::parse_from(["vads-docs", "find", "components.d.ts", "va-button"]);
        if let Commands::Find { name, .. } = cli.command {
            assert_eq!(name, "va-button");
        } else {
            panic!("Expected Find command");
        }
    }

    #[test]
    fn test_cli_parsing_examples_defaults() {
        let cli = Cli::parse_from(["vads-docs", "examples", "components.d.ts", "button"]);
        if let Commands::Examples {
            types,
            framework,
            no_description,
            ..
        } = cli.command
        {
            assert!(types.is_empty());
            assert_eq!(framework, "html");
            assert!(!no_description);
        } else {
            panic!("Expected Examples command");
        }
    }

    #[test]
    fn test_cli_parsing_examples_types() {
        let cli = Cli::parse_from([
            "vads-docs",
            "examples",
            "components.d.ts",
            "button",
            "--type",
            "basic",
            "--type",
            "a11y",
            "--no-description",
        ]);
        if let Commands::Examples {
            types,
            no_description,
            ..
        } = cli.command
        {
            assert_eq!(types, [ExampleType::Basic, ExampleType::Accessibility]);
            assert!(no_description);
        } else {
            panic!("Expected Examples command");
        }
    }

    #[test]
    fn test_cli_parsing_config_init() {
        let cli = Cli::parse_from(["vads-docs", "config", "init", "--force"]);
        if let Commands::Config { action } = cli.command {
            assert_eq!(action, ConfigAction::Init { force: true });
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["vads-docs", "--verbose", "suggest", "c.d.ts", "btn"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["vads-docs", "suggest", "c.d.ts", "btn"]);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["vads-docs", "--format", "json", "suggest", "c.d.ts", "btn"]);
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["vads-docs", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
