use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for otterconf
#[derive(Parser, Debug)]
#[command(name = "otterconf")]
#[command(about = "Inspect and edit Otter Browser settings from the command line")]
pub struct Cli {
    /// Otter profile directory (default: auto-detected)
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the profile directory and its settings files
    Profile,

    /// List effective option values as a JSON object
    List {
        /// Only include names matching these glob patterns (OR logic)
        #[arg(short, long)]
        query: Vec<String>,

        /// Resolve values as seen by this page URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Print one effective option value
    Get {
        /// Option name, e.g. Browser/HomePage
        name: String,

        /// Resolve the value as seen by this page URL
        #[arg(short, long)]
        url: Option<String>,

        /// Print the value as JSON instead of raw text
        #[arg(long)]
        json: bool,
    },

    /// Write an option value, globally or as a per-site override
    Set {
        /// Option name, e.g. Browser/HomePage
        name: String,

        /// New value, parsed according to the option's type
        value: String,

        /// Override for this page URL's host instead of the global value
        #[arg(short, long, conflicts_with = "host")]
        url: Option<String>,

        /// Override for this host or wildcard pattern (e.g. *.example.org)
        #[arg(long)]
        host: Option<String>,
    },

    /// Remove a global value or override entries
    Unset {
        /// Option name; omit together with --url/--host to drop a whole scope
        name: Option<String>,

        /// Remove from this page URL's host scope
        #[arg(short, long, conflicts_with = "host")]
        url: Option<String>,

        /// Remove from this host or wildcard scope
        #[arg(long)]
        host: Option<String>,
    },

    /// List scopes with overrides, or one scope's entries
    Overrides {
        /// Host or wildcard pattern to inspect
        scope: Option<String>,
    },

    /// Print the settings diagnostic report
    Report,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }
}
