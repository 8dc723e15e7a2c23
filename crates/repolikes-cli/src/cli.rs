// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for repolikes.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(repolikes completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      repolikes completion generate zsh > ~/.zsh/completions/_repolikes

  fish
    Generate completion file:
      repolikes completion generate fish > ~/.config/fish/completions/repolikes.fish
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners)
    pub quiet: bool,
    /// Show element identifiers next to each card
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, dialogs) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// repolikes - browse repositories and like them.
///
/// Loads the repository list from the configured API, shows one card per
/// repository and sends likes back to the server.
#[derive(Parser)]
#[command(name = "repolikes")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Show element identifiers next to each card
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured API base URL (e.g., http://localhost:3333)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Load the repository list and show it
    List,

    /// Like one or more repositories, then show the list
    Like {
        /// Repository identifiers, liked in the given order
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },

    /// Browse the list interactively and like repositories
    Browse,

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
