//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "reckon",
    bin_name = "reckon",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive arithmetic calculator with history",
    long_about = "Reckon adds, subtracts, multiplies and divides in an \
                  interactive session and remembers every calculation.",
    after_help = "EXAMPLES:\n\
        \x20 reckon                     # start the interactive calculator\n\
        \x20 reckon eval divide 20 5\n\
        \x20 reckon --output-format json eval add 5 3\n\
        \x20 reckon completions bash > /usr/share/bash-completion/completions/reckon",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the REPL when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive calculator (default).
    #[command(
        about = "Start the interactive calculator",
        after_help = "COMMANDS (inside the session):\n\
            \x20 add|subtract|multiply|divide <num1> <num2>\n\
            \x20 list | clear | help | exit"
    )]
    Repl(ReplArgs),

    /// Evaluate a single operation and exit.
    #[command(
        visible_alias = "e",
        about = "Evaluate one operation",
        after_help = "EXAMPLES:\n\
            \x20 reckon eval add 5 3\n\
            \x20 reckon eval subtract -2 -7.5"
    )]
    Eval(EvalArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 reckon completions bash > ~/.local/share/bash-completion/completions/reckon\n\
            \x20 reckon completions zsh  > ~/.zfunc/_reckon\n\
            \x20 reckon completions fish > ~/.config/fish/completions/reckon.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Reckon configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 reckon config get repl.prompt\n\
            \x20 reckon config list\n\
            \x20 reckon config path"
    )]
    Config(ConfigCommands),
}

// ── repl ──────────────────────────────────────────────────────────────────────

/// Arguments for `reckon repl`.
#[derive(Debug, Args, Default)]
pub struct ReplArgs {
    /// Skip the welcome banner.
    #[arg(long = "no-banner", help = "Do not print the welcome banner")]
    pub no_banner: bool,
}

// ── eval ──────────────────────────────────────────────────────────────────────

/// Arguments for `reckon eval`.
#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Operation verb: add, subtract, multiply or divide.
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// First operand.
    #[arg(value_name = "NUM1", allow_negative_numbers = true)]
    pub operand1: String,

    /// Second operand.
    #[arg(value_name = "NUM2", allow_negative_numbers = true)]
    pub operand2: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `reckon completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `reckon config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `repl.prompt`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
