//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "onionforge",
    bin_name = "onionforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9c5} Onion-architecture blueprint validation and inspection",
    long_about = "Onionforge models an onion-architecture blueprint (entities, \
                  domain services, application services, derived repositories) \
                  as a validated graph and hands it to a code generator.",
    after_help = "EXAMPLES:\n\
        \x20 onionforge validate blueprint.json\n\
        \x20 onionforge show blueprint.json\n\
        \x20 onionforge show blueprint.json UserAppService\n\
        \x20 onionforge init --path blueprint.json\n\
        \x20 onionforge completions bash > /usr/share/bash-completion/completions/onionforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a blueprint file for structural consistency.
    #[command(
        visible_alias = "check",
        about = "Validate a blueprint file",
        after_help = "EXAMPLES:\n\
            \x20 onionforge validate blueprint.json\n\
            \x20 onionforge validate blueprint.json --quiet  # exit code only"
    )]
    Validate(ValidateArgs),

    /// Inspect a blueprint: ring summary or a single node's view.
    #[command(
        visible_alias = "inspect",
        about = "Show blueprint contents",
        after_help = "EXAMPLES:\n\
            \x20 onionforge show blueprint.json\n\
            \x20 onionforge show blueprint.json UserService\n\
            \x20 onionforge show blueprint.json UserService --format json"
    )]
    Show(ShowArgs),

    /// Write a starter blueprint file.
    #[command(
        about = "Create a starter blueprint",
        after_help = "EXAMPLES:\n\
            \x20 onionforge init                          # ./blueprint.json\n\
            \x20 onionforge init --path demo.json --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 onionforge completions bash > ~/.local/share/bash-completion/completions/onionforge\n\
            \x20 onionforge completions zsh  > ~/.zfunc/_onionforge\n\
            \x20 onionforge completions fish > ~/.config/fish/completions/onionforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Onionforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 onionforge config get defaults.ui_framework\n\
            \x20 onionforge config list"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `onionforge validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Blueprint file to check.
    #[arg(value_name = "FILE", help = "Path to the blueprint JSON file")]
    pub file: PathBuf,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `onionforge show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Blueprint file to inspect.
    #[arg(value_name = "FILE", help = "Path to the blueprint JSON file")]
    pub file: PathBuf,

    /// Node to describe.  Omit for a ring summary of the whole blueprint.
    #[arg(value_name = "NODE", help = "Node name (entity, service, or I{Entity}Repository)")]
    pub node: Option<String>,

    /// Output format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ShowFormat,
}

/// Output formats for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Human-readable sections.
    Table,
    /// One name per line.
    List,
    /// Machine-readable JSON.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `onionforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Destination path for the starter blueprint.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "FILE",
        default_value = "blueprint.json",
        help = "Where to write the starter blueprint"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long = "force", help = "Overwrite if the file already exists")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `onionforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands of `onionforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Read a single configuration value.
    Get {
        /// Dotted key, e.g. `defaults.ui_framework`.
        key: String,
    },
    /// Print the whole configuration as TOML.
    List,
    /// Print the configuration file path.
    Path,
}
