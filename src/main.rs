//! Sigil - deterministic identicons from the command line.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use sigil::config::SigilConfig;
use sigil::logger;

fn main() {
    if let Err(e) = run() {
        sigil::log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.is_verbose());

    dispatch(&cli)
}

/// Run the selected command. The config is only read by commands that render.
fn dispatch(cli: &Cli) -> Result<()> {
    let load = || SigilConfig::load(&cli.config);
    match &cli.command {
        Commands::Hash { value } => cli::render::run_hash(value),
        Commands::Grid { args } => cli::render::run_grid(args, &load()?),
        Commands::Dots { args } => cli::render::run_dots(args, &load()?),
        Commands::Batch { args } => cli::batch::run_batch(args, &load()?),
    }
}
