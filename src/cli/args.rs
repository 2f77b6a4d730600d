//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use sigil::{IconKind, KeyEncoding, kind::DotsFormat};
use std::path::PathBuf;

/// Deterministic identicon generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sigil.toml)
    #[arg(short = 'C', long, default_value = "sigil.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn is_verbose(&self) -> bool {
        match &self.command {
            Commands::Grid { args } => args.verbose,
            Commands::Dots { args } => args.verbose,
            Commands::Batch { args } => args.verbose,
            Commands::Hash { .. } => false,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a grid identicon as SVG
    #[command(visible_alias = "g")]
    Grid {
        #[command(flatten)]
        args: GridArgs,
    },

    /// Render a circular identicon from a public key
    #[command(visible_alias = "d")]
    Dots {
        #[command(flatten)]
        args: DotsArgs,
    },

    /// Print the normalized hash used by the grid identicon
    #[command(visible_alias = "h")]
    Hash {
        /// Seed or hex hash
        value: String,
    },

    /// Render many icons from a list of seeds
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
}

/// Grid command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GridArgs {
    /// Seed string or hex hash (at least 11 hex digits are used as-is)
    pub seed: String,

    /// Icon size in pixels
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Padding as a fraction of the size, in [0, 0.5)
    #[arg(short, long)]
    pub padding: Option<f32>,

    /// Background colour, #RRGGBB or #RRGGBBAA
    #[arg(long)]
    pub background: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Dots command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct DotsArgs {
    /// Public key as hex (optionally 0x-prefixed) or base58
    pub key: String,

    /// Icon size in pixels
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<DotsFormat>,

    /// How to decode the key
    #[arg(long, value_enum, default_value = "auto")]
    pub encoding: KeyEncoding,

    /// Output file (required for png)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// File with one seed per line. Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub list: PathBuf,

    /// Which identicon to render
    #[arg(short, long, value_enum, default_value = "grid")]
    pub kind: IconKind,

    /// How to decode keys when rendering dots
    #[arg(long, value_enum, default_value = "auto")]
    pub encoding: KeyEncoding,

    /// Output directory (default: `[output] dir` from the config)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Skip writing manifest.json
    #[arg(long)]
    pub no_manifest: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
