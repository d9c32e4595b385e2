use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "scriptforge",
    about = "Generate Perl script bundles from natural-language requests",
    version,
    author,
    long_about = None
)]
pub struct ForgeCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to use, overriding the configured default
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Perl script from a natural-language description
    Generate {
        /// What the script should do
        prompt: Vec<String>,

        /// Save the generated bundle to disk without asking
        #[arg(short, long)]
        save: bool,

        /// Filename for the main script
        #[arg(short, long)]
        filename: Option<String>,

        /// Directory to save into (defaults to the configured location)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Consume the response as a stream of fragments
        #[arg(long)]
        stream: bool,

        /// Attempt budget for this request
        #[arg(short, long)]
        attempts: Option<u32>,
    },

    /// Show the active configuration
    Config,

    /// Check connectivity to the completion service
    Test,

    /// Show usage examples
    Examples,
}
