//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Search stock photos from the command line
#[derive(Parser, Debug)]
#[command(name = "pixsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key, overrides the config file and PIXABAY_API_KEY
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for images
    Search {
        /// Search text
        query: String,

        /// Number of pages to load, stops early at the end of results
        #[arg(
            short,
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        pages: u32,
    },

    /// Read queries from stdin; `:more` loads the next page, `:quit` exits
    Interactive,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable gallery
    Pretty,
    /// JSON output (one message per line)
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["pixsearch", "-k", "abc", "search", "red cats", "--pages", "3"]);
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Search { query, pages } => {
                assert_eq!(query, "red cats");
                assert_eq!(pages, 3);
            }
            Commands::Interactive => panic!("Expected Search"),
        }
    }

    #[test]
    fn test_search_pages_must_be_positive() {
        let err = Cli::try_parse_from(["pixsearch", "search", "cats", "--pages", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["pixsearch", "search", "cats"]).unwrap();
        assert!(matches!(cli.command, Commands::Search { pages: 1, .. }));
    }

    #[test]
    fn test_parse_interactive_json() {
        let cli = Cli::parse_from(["pixsearch", "interactive", "--format", "json", "-v"]);
        assert!(matches!(cli.command, Commands::Interactive));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }
}
