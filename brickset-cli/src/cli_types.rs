//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brickset")]
#[command(about = "Query the LEGO set catalog", long_about = None)]
pub(crate) struct Cli {
    /// JSON catalog to load instead of the configured or bundled one
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the demonstration report when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the fixed demonstration report
    Demo,

    /// Count the sets carrying a tag
    CountTag {
        /// Tag to look for (exact match, e.g. "Microscale")
        tag: String,
    },

    /// List set names in alphabetical order
    Names {
        /// Only sets with a known piece count below this limit
        #[arg(short, long)]
        under: Option<u32>,
    },

    /// List the distinct packaging types
    Packaging,

    /// List the themes in catalog order
    Themes,

    /// Sum the pieces of a theme, or of every theme when omitted
    Pieces {
        /// Theme name (exact, case-sensitive)
        theme: Option<String>,
    },

    /// Show the largest set of a theme
    Largest {
        /// Theme name (exact, case-sensitive)
        #[arg(default_value = "Star Wars")]
        theme: String,
    },

    /// Show a single set by its number (e.g. 75192-1)
    Show {
        number: String,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved catalog source
    Show,

    /// Print the settings file path
    Path,
}
