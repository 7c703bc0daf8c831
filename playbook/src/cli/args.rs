//! CLI argument definitions
//!
//! All Clap derive structs for `playbook` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Expand marketing post stubs into full playbook pages.
#[derive(Parser, Debug)]
#[command(name = "playbook", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PLAYBOOK_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human", global = true, env = "PLAYBOOK_LOG_FORMAT")]
    pub log_format: OutputFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite every post under the content directory into a playbook page.
    Expand(ExpandArgs),

    /// Lint post metadata without writing anything.
    Check(CheckArgs),

    /// Render a single hero illustration.
    Hero(HeroArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Directory and settings options shared by `expand` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory scanned recursively for post sources.
    #[arg(long, env = "PLAYBOOK_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Path to a YAML settings file.
    #[arg(short, long, env = "PLAYBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for `expand`.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Content and settings locations.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory hero SVGs are written to.
    #[arg(long, env = "PLAYBOOK_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Summary output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Content and settings locations.
    #[command(flatten)]
    pub source: SourceArgs,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,

    /// Report format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `hero`.
#[derive(Args, Debug)]
pub struct HeroArgs {
    /// Topic line drawn as the headline.
    #[arg(long)]
    pub topic: String,

    /// Keyword (repeatable, up to three are drawn as nodes).
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Write the SVG here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
