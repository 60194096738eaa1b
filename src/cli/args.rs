//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Compose blog `<head>` meta tags from config and front matter
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: config.toml)
    #[arg(short = 'C', long, global = true, default_value = "config.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the head tags of one content file
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Compose head tags for every content file
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },

    /// Validate configuration and referenced assets
    #[command(visible_alias = "c")]
    Check,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Content file (`_index.md` renders as a section)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// URL for `og:url` (default: the file's permalink)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Output a JSON array instead of one tag per line
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Content directory (default: `build.content` from config)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Output directory (default: `build.output` from config)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["metahead", "render", "content/post.md", "--json", "-p"]);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.file, PathBuf::from("content/post.md"));
        assert!(args.json && args.pretty);
        assert!(args.url.is_none());
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(Cli::try_parse_from(["metahead", "render", "a.md", "--pretty"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["metahead", "batch", "-o", "out", "-v", "-C", "site.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Batch { args } = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.content.is_none());
    }
}
