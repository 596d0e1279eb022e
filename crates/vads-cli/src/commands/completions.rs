//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;
use vads_docs_core::cli::ExitCode;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::CommandFactory;
/// use clap_complete::Shell;
/// use vads_docs_cli::cli::Cli;
/// use vads_docs_cli::commands::completions;
///
/// let mut script = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut Cli::command(), &mut script);
/// assert!(String::from_utf8(script).unwrap().contains("vads-docs"));
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {} completions", shell);
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Never fails; the `Result` keeps the signature uniform with the other
/// commands.
pub async fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        generate_completions(shell, &mut Cli::command(), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_completions_list_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("components"));
        assert!(script.contains("examples"));
    }

    #[test]
    fn test_zsh_completions() {
        assert!(script(Shell::Zsh).contains("#compdef vads-docs"));
    }

    #[test]
    fn test_fish_completions() {
        assert!(script(Shell::Fish).contains("vads-docs"));
    }

    #[test]
    fn test_powershell_completions() {
        assert!(!script(Shell::PowerShell).is_empty());
    }

    #[tokio::test]
    async fn test_run_bash() {
        let mut cmd = Command::new("test-cli");
        let result = run(Shell::Bash, &mut cmd).await;
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }
}
