//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::Parser;

use commands::NotesCommand;

/// bumpnotes - list issue tracker tickets for dependencies bumped between two releases
#[derive(Debug, Parser)]
#[command(name = "bumpnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except links and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    /// Configuration file (default: search from the working directory)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub notes: NotesCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        self.notes.execute(self)
    }
}
