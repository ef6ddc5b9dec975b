use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod error;
pub mod output;
pub mod handler;

/// Stargate - validate and apply schema documents against a Stargate server
#[derive(Parser, Debug)]
#[command(name = "stargate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config directory path
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level, written to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log records as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate schema
    #[command(after_help = "Example: stargate validate ./todo.conf http://server.stargate.com:8080")]
    Validate(SchemaArgs),

    /// Apply schema
    #[command(after_help = "Example: stargate apply ./todo.conf http://server.stargate.com:8080")]
    Apply(SchemaArgs),
}

/// Positional arguments shared by the schema commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SchemaArgs {
    /// Path to the schema document
    pub path: PathBuf,

    /// Server URL (defaults to server.default_host from settings)
    pub host: Option<String>,

    /// Further positionals are accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true)]
    pub extra: Vec<String>,
}

impl SchemaArgs {
    /// Server URL as passed to the collaborator.
    ///
    /// The second positional is only a URL when exactly two were given; otherwise empty.
    pub fn url(&self) -> &str {
        if !self.extra.is_empty() {
            return "";
        }
        self.host.as_deref().unwrap_or_default()
    }
}
