//! metahead - composes blog `<head>` meta tags from site config and front matter.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod content;
mod head;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Batch { args } => cli::batch::run_batch(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}
