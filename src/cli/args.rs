//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Import the newest browser bookmark export into a MeNav site config
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (relative to project root)
    #[arg(short = 'C', long, default_value = "menav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root directory (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Omit the generation time from the page header
    #[arg(long)]
    pub no_timestamp: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["menav-bookmarks"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("menav.toml"));
        assert!(cli.root.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_timestamp);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "menav-bookmarks",
            "-r",
            "/site",
            "-C",
            "import.toml",
            "-v",
            "--no-timestamp",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/site")));
        assert_eq!(cli.config, PathBuf::from("import.toml"));
        assert!(cli.verbose);
        assert!(cli.no_timestamp);
        assert_eq!(cli.color, ColorChoice::Never);
    }
}
