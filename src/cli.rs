//! Command-line definition: subcommands, link arguments and global flags.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::i18n::Language;
use crate::link::LinkType;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "winmklink",
    about = "Build and run mklink commands: symbolic links, hard links and junctions",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Print the command that would run without running it
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Display language for this run (overrides the saved preference)
    #[arg(short = 'l', long = "lang", value_enum, global = true)]
    pub lang: Option<Language>,

    /// Config file to use instead of ~/.config/winmklink/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the mklink command for a target and link
    Preview(LinkArgs),
    /// Create a link by running mklink
    Create(CreateOpts),
    /// List link types with their flags and labels
    Types,
    /// Save the preferred display language
    Lang(LangOpts),
    /// Report Developer Mode, output code page and tool availability
    Status,
    /// Print a shell completion script
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the per-command log file.
    #[must_use]
    pub const fn log_name(&self) -> &'static str {
        match self {
            Self::Preview(_) => "preview",
            Self::Create(_) => "create",
            Self::Types => "types",
            Self::Lang(_) => "lang",
            Self::Status => "status",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// Target, link and link type.
#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    /// Existing file or directory the link points to
    pub target: PathBuf,

    /// Where to create the link; defaults to the target's name in the
    /// current directory, and an existing directory receives the target's name
    pub link: Option<PathBuf>,

    /// Kind of link (defaults to the configured type, normally `symlink`)
    #[arg(short = 't', long = "type", value_enum)]
    pub link_type: Option<LinkType>,
}

/// Options for the `create` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CreateOpts {
    /// Target, link and link type.
    #[command(flatten)]
    pub link: LinkArgs,

    /// Run in a new elevated console (UAC prompt); output stays in that console
    #[arg(short = 'e', long)]
    pub elevated: bool,
}

/// Options for the `lang` subcommand.
#[derive(Args, Debug, Clone)]
pub struct LangOpts {
    /// Language to save
    #[arg(value_enum)]
    pub language: Language,
}

/// Options for the `completions` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
